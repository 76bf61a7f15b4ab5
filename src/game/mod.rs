//! Core game logic for the 3D snake
//!
//! This module contains the simulation without any I/O or rendering
//! dependencies: the snake, the coins and the tick-driven session that ties
//! them together.

pub mod coins;
pub mod config;
pub mod direction;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use coins::CoinSet;
pub use config::GameConfig;
pub use direction::Direction;
pub use session::{GameSession, TickReport};
pub use state::{Cell, CollisionType, SnakeBody};
