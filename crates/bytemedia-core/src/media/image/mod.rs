pub mod decoder;
mod encoder;

pub use encoder::{CanvasGeometry, ImageEncoder, ImageSummary, PixelPainter};
