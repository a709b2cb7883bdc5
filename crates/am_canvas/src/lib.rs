pub mod canvas;
pub mod raster;

pub use canvas::{Canvas, Point, defaults};
