pub mod projection;
pub mod renderer;

pub use projection::{Mark, Plane, Projection};
pub use renderer::Renderer;
