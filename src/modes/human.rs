use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io::{Stderr, stderr};
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{GameConfig, GameSession};
use crate::input::{FrameInput, InputHandler};
use crate::scene::{SceneRegistry, SharedSession, build_registry};

/// Options of the interactive front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanOptions {
    /// Frames per second; one simulation tick per frame
    pub fps: u32,
    /// Fixed seed for coin placement
    pub seed: Option<u64>,
}

impl Default for HumanOptions {
    fn default() -> Self {
        Self { fps: 30, seed: None }
    }
}

pub struct HumanMode {
    registry: SceneRegistry,
    session: SharedSession,
    input_handler: InputHandler,
    frame_input: FrameInput,
    fps: u32,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, options: HumanOptions) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        let session = match options.seed {
            Some(seed) => GameSession::seeded(config, seed),
            None => GameSession::new(config),
        };
        let session = Rc::new(RefCell::new(session));
        let fps = options.fps.max(1);
        let registry = build_registry(Rc::clone(&session), fps)?;

        Ok(Self {
            registry,
            session,
            input_handler: InputHandler::new(),
            frame_input: FrameInput::default(),
            fps,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_frame_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_frame_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let frame_interval = Duration::from_secs(1) / self.fps;
        let mut frame_timer = interval(frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(fps = self.fps, "frame loop started");

        loop {
            tokio::select! {
                // Collect input until the next frame
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: draw, then update
                _ = frame_timer.tick() => {
                    terminal.draw(|frame| self.registry.draw(frame))
                        .context("Failed to draw frame")?;
                    let input = std::mem::take(&mut self.frame_input);
                    self.registry.update(&input)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(score = self.session.borrow().score(), "quitting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.frame_input.record(action);
            if self.frame_input.quit {
                self.should_quit = true;
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
