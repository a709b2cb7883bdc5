use am_gesture::HandLandmarks;

/// One color frame from the acquisition flow.
pub type Frame = image::RgbImage;

/// Continuous frame producer (a camera, a file replay, a synthetic script).
///
/// A failed read returns `None`; the caller skips that iteration and does not
/// retry with backoff.
pub trait FrameSource: Send {
    fn read(&mut self) -> Option<Frame>;
}

/// Pose collaborator: one color frame in, zero-or-one hand's landmarks out.
pub trait PoseEstimator {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks>;
}
