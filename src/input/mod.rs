pub mod handler;

pub use handler::{FrameInput, InputHandler, KeyAction};
