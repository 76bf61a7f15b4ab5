use ratatui::Frame;

use super::{Scene, SceneId, SceneRequest};
use crate::input::FrameInput;
use crate::render::Renderer;

/// Title screen; any key starts a run
pub struct StartMenuScene {
    request: SceneRequest,
    renderer: Renderer,
}

impl StartMenuScene {
    pub fn new() -> Self {
        Self {
            request: SceneRequest::default(),
            renderer: Renderer::new(),
        }
    }
}

impl Default for StartMenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for StartMenuScene {
    fn id(&self) -> SceneId {
        SceneId::StartMenu
    }

    fn update(&mut self, input: &FrameInput) {
        if input.key_pressed {
            self.request.request(SceneId::Play);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.renderer.render_menu(frame);
    }

    fn take_request(&mut self) -> Option<SceneId> {
        self.request.take()
    }
}
