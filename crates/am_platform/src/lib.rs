pub mod traits;

pub use traits::{Frame, FrameSource, PoseEstimator};
