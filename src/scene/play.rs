use ratatui::Frame;

use super::{Scene, SceneId, SceneRequest, SharedSession};
use crate::input::FrameInput;
use crate::render::Renderer;

/// Frames the score stays highlighted after a coin is eaten
const PICKUP_FLASH_FRAMES: u32 = 10;

/// Runs the session one tick per frame until the snake crashes
pub struct PlayScene {
    session: SharedSession,
    request: SceneRequest,
    renderer: Renderer,
    pickup_flash: u32,
}

impl PlayScene {
    pub fn new(session: SharedSession) -> Self {
        Self {
            session,
            request: SceneRequest::default(),
            renderer: Renderer::new(),
            pickup_flash: 0,
        }
    }
}

impl Scene for PlayScene {
    fn id(&self) -> SceneId {
        SceneId::Play
    }

    fn on_enter(&mut self) {
        self.pickup_flash = 0;
    }

    fn update(&mut self, input: &FrameInput) {
        let mut session = self.session.borrow_mut();
        let report = session.update(input.direction);

        if report.coin_collected {
            self.pickup_flash = PICKUP_FLASH_FRAMES;
        } else {
            self.pickup_flash = self.pickup_flash.saturating_sub(1);
        }

        if session.is_terminal() {
            self.request.request(SceneId::GameOver);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.session.borrow();
        self.renderer.render_play(frame, &session, self.pickup_flash > 0);
    }

    fn take_request(&mut self) -> Option<SceneId> {
        self.request.take()
    }
}
