//! Snake 3D - a tick-based snake game played inside a cube
//!
//! This library provides:
//! - Core simulation: snake, coins and the per-tick session (game module)
//! - The StartMenu / Play / GameOver state machine (scene module)
//! - Keyboard mapping (input module)
//! - TUI rendering of the cube as three projections (render module)
//! - Run statistics (metrics module)
//! - The interactive terminal front end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scene;
