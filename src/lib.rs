// Procedural galaxy images: a per-pixel probability field decides which pixels of a
// translucent galaxy layer get painted, and that layer is composited over a starry
// background.

pub mod background;
pub mod composite;
pub mod config;
pub mod error;
pub mod gradient;
pub mod lenticular;
pub mod output;
mod render;
pub mod spiral;
pub mod types;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod wizard;

pub use error::Error;
pub use lenticular::{lenticular_layer, render_lenticular, render_lenticular_with};
pub use spiral::{render_spiral, render_spiral_with, spiral_layer};
pub use types::{Background, Canvas, CanvasConfig, Color, Galaxy, LenticularConfig, SpiralConfig};
