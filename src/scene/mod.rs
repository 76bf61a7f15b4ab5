//! Scene state machine
//!
//! The game cycles StartMenu → Play → GameOver → Play … Each scene decides
//! when to leave by posting a request for another scene's id; the
//! [`SceneRegistry`] honours it on its next update.

pub mod game_over;
pub mod menu;
pub mod play;
pub mod registry;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ratatui::Frame;

use crate::game::GameSession;
use crate::input::FrameInput;

pub use game_over::GameOverScene;
pub use menu::StartMenuScene;
pub use play::PlayScene;
pub use registry::SceneRegistry;

/// Session shared by the Play and GameOver scenes on the UI thread
pub type SharedSession = Rc<RefCell<GameSession>>;

/// Key identifying a scene in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    StartMenu,
    Play,
    GameOver,
}

impl SceneId {
    pub fn name(self) -> &'static str {
        match self {
            SceneId::StartMenu => "StartMenu",
            SceneId::Play => "Play",
            SceneId::GameOver => "GameOver",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A screen of the game
pub trait Scene {
    fn id(&self) -> SceneId;

    /// Called by the registry when this scene becomes current
    fn on_enter(&mut self) {}

    fn update(&mut self, input: &FrameInput);

    fn draw(&self, frame: &mut Frame);

    /// Hand over a pending transition request, clearing it
    fn take_request(&mut self) -> Option<SceneId>;
}

/// One-shot transition request slot embedded in each scene
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneRequest(Option<SceneId>);

impl SceneRequest {
    pub fn request(&mut self, target: SceneId) {
        self.0 = Some(target);
    }

    pub fn take(&mut self) -> Option<SceneId> {
        self.0.take()
    }

    pub fn pending(&self) -> Option<SceneId> {
        self.0
    }
}

/// Build the standard StartMenu / Play / GameOver registry around one session
pub fn build_registry(session: SharedSession, tick_rate: u32) -> anyhow::Result<SceneRegistry> {
    let scenes: Vec<Box<dyn Scene>> = vec![
        Box::new(StartMenuScene::new()),
        Box::new(PlayScene::new(Rc::clone(&session))),
        Box::new(GameOverScene::new(session, tick_rate)),
    ];
    SceneRegistry::new(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, GameConfig, GameSession, SnakeBody};
    use ratatui::{Terminal, backend::TestBackend};

    fn shared_session() -> SharedSession {
        Rc::new(RefCell::new(GameSession::seeded(GameConfig::default(), 5)))
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(SceneId::StartMenu.to_string(), "StartMenu");
        assert_eq!(SceneId::Play.name(), "Play");
        assert_eq!(SceneId::GameOver.name(), "GameOver");
    }

    #[test]
    fn test_scene_request_is_one_shot() {
        let mut request = SceneRequest::default();
        assert_eq!(request.take(), None);

        request.request(SceneId::Play);
        assert_eq!(request.pending(), Some(SceneId::Play));
        assert_eq!(request.take(), Some(SceneId::Play));
        assert_eq!(request.take(), None);
    }

    #[test]
    fn test_scene_round_trip() {
        let session = shared_session();
        let mut registry = build_registry(Rc::clone(&session), 30).unwrap();
        let idle = FrameInput::default();

        assert_eq!(registry.current(), SceneId::StartMenu);

        // Idle frames keep the menu up
        registry.update(&idle).unwrap();
        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::StartMenu);

        // A key press posts the request, the next update switches
        registry.update(&FrameInput::any_key()).unwrap();
        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::Play);
        assert_eq!(session.borrow().tick(), 1);

        // Put the head against the wall and play until the run ends
        *session.borrow_mut().snake_mut() =
            SnakeBody::new(Cell::new(6, 0, 0), Direction::PosX, 3);
        session.borrow_mut().coins_mut().insert(Cell::new(-4, 2, 2));
        while !session.borrow().is_terminal() {
            registry.update(&idle).unwrap();
        }
        assert_eq!(registry.current(), SceneId::Play);
        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::GameOver);

        // GameOver waits for a key, then resets the session and heads back
        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::GameOver);
        assert!(session.borrow().is_terminal());

        registry.update(&FrameInput::any_key()).unwrap();
        {
            let session = session.borrow();
            assert!(!session.is_terminal());
            assert_eq!(session.score(), 0);
            assert_eq!(session.tick(), 0);
            assert_eq!(session.snake().len(), 3);
            assert!(session.coins().is_empty());
        }

        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::Play);
        assert_eq!(session.borrow().tick(), 1);
    }

    #[test]
    fn test_game_over_shows_finished_run_when_key_held_through_crash() {
        let session = shared_session();
        let mut registry = build_registry(Rc::clone(&session), 30).unwrap();
        let idle = FrameInput::default();

        registry.update(&FrameInput::any_key()).unwrap();
        registry.update(&idle).unwrap();
        assert_eq!(registry.current(), SceneId::Play);

        // Eat one coin, then run into the +X wall
        session.borrow_mut().coins_mut().insert(Cell::new(1, 0, 0));
        while session.borrow().score() == 0 {
            registry.update(&idle).unwrap();
        }
        *session.borrow_mut().snake_mut() =
            SnakeBody::new(Cell::new(6, 0, 0), Direction::PosX, 3);
        while !session.borrow().is_terminal() {
            registry.update(&idle).unwrap();
        }

        // Still steering on the frame after the crash: GameOver is entered
        // and restarts the session within the same update.
        registry.update(&FrameInput::steer(Direction::PosY)).unwrap();
        assert_eq!(registry.current(), SceneId::GameOver);
        assert_eq!(session.borrow().score(), 0);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| registry.draw(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("Score: 1"));
        assert!(text.contains("Time: 00:01"));
        assert!(text.contains("You left the cube"));
    }
}
