pub mod classifier;
pub mod landmarks;
pub mod stabilizer;
pub mod types;

pub use classifier::{GestureClassifier, classify_fingers};
pub use landmarks::{FingerState, HandLandmarks, NormPoint, defaults};
pub use stabilizer::{GestureStabilizer, StabilizedGesture};
pub use types::Gesture;
