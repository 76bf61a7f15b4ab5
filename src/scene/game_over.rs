use ratatui::Frame;

use super::{Scene, SceneId, SceneRequest, SharedSession};
use crate::input::FrameInput;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Shows the result of the finished run; any key resets the session and
/// starts a new one
pub struct GameOverScene {
    session: SharedSession,
    metrics: GameMetrics,
    request: SceneRequest,
    renderer: Renderer,
}

impl GameOverScene {
    pub fn new(session: SharedSession, tick_rate: u32) -> Self {
        Self {
            session,
            metrics: GameMetrics::new(tick_rate),
            request: SceneRequest::default(),
            renderer: Renderer::new(),
        }
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }
}

impl Scene for GameOverScene {
    fn id(&self) -> SceneId {
        SceneId::GameOver
    }

    fn on_enter(&mut self) {
        let session = self.session.borrow();
        self.metrics
            .on_game_over(session.score(), session.tick(), session.collision());
    }

    fn update(&mut self, input: &FrameInput) {
        if input.key_pressed {
            self.session.borrow_mut().reset();
            self.request.request(SceneId::Play);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        // The session may already be reset for the next run
        self.renderer.render_game_over(frame, &self.metrics);
    }

    fn take_request(&mut self) -> Option<SceneId> {
        self.request.take()
    }
}
