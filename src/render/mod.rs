pub mod renderer;

pub use renderer::{Renderer, segment_color};
