//! Scripted collaborators for the headless demo and the integration tests.
//!
//! Real deployments plug in a camera-backed `FrameSource` and a hand-tracking
//! `PoseEstimator`; these stand-ins replay predetermined poses so the full
//! pipeline can run without hardware.

use am_gesture::{HandLandmarks, NormPoint};
use am_ocr::{TextRecognizer, TextSpan};
use am_platform::{Frame, FrameSource, PoseEstimator};

/// Build a landmark set producing the given finger-up vector, with the index
/// fingertip at a chosen normalized position.
pub fn pose(fingers: [bool; 5], tip_x: f32, tip_y: f32) -> HandLandmarks {
    let mut pts = [NormPoint::new(0.5, 0.5); 21];

    // Thumb: up means the tip sits left of the base by more than the margin.
    pts[HandLandmarks::THUMB_BASE] = NormPoint::new(0.5, 0.5);
    pts[HandLandmarks::THUMB_TIP] = if fingers[0] {
        NormPoint::new(0.4, 0.5)
    } else {
        NormPoint::new(0.5, 0.5)
    };

    for (i, (&tip, &mid)) in HandLandmarks::FINGER_TIPS
        .iter()
        .zip(HandLandmarks::FINGER_MIDS.iter())
        .enumerate()
    {
        let (mx, my) = if tip == HandLandmarks::INDEX_TIP {
            (tip_x, tip_y)
        } else {
            (0.5, 0.5)
        };
        if fingers[i + 1] {
            pts[mid] = NormPoint::new(mx, my + 0.1);
            pts[tip] = NormPoint::new(mx, my);
        } else {
            pts[mid] = NormPoint::new(mx, my);
            pts[tip] = NormPoint::new(mx, my + 0.1);
        }
    }

    HandLandmarks::new(pts)
}

/// Index finger only: the Write pose.
pub fn write_pose(tip_x: f32, tip_y: f32) -> HandLandmarks {
    pose([false, true, false, false, false], tip_x, tip_y)
}

/// Fist: the Solve pose.
pub fn solve_pose() -> HandLandmarks {
    pose([false, false, false, false, false], 0.5, 0.5)
}

/// Open hand: the Clear pose.
pub fn clear_pose() -> HandLandmarks {
    pose([true, true, true, true, true], 0.5, 0.5)
}

/// Endless synthetic camera: blank frames at a fixed size.
pub struct SyntheticSource {
    width: u32,
    height: u32,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FrameSource for SyntheticSource {
    fn read(&mut self) -> Option<Frame> {
        Some(Frame::new(self.width, self.height))
    }
}

/// Replays a fixed pose sequence, then reports no hand.
pub struct ScriptedPose {
    steps: Vec<Option<HandLandmarks>>,
    cursor: usize,
}

impl ScriptedPose {
    pub fn new(steps: Vec<Option<HandLandmarks>>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Repeat each pose `n` times (stabilization needs runs, not single frames).
    pub fn held(steps: Vec<Option<HandLandmarks>>, n: usize) -> Self {
        let mut expanded = Vec::with_capacity(steps.len() * n);
        for step in steps {
            for _ in 0..n {
                expanded.push(step);
            }
        }
        Self::new(expanded)
    }
}

impl PoseEstimator for ScriptedPose {
    fn detect(&mut self, _frame: &Frame) -> Option<HandLandmarks> {
        let step = self.steps.get(self.cursor).copied().flatten();
        if self.cursor < self.steps.len() {
            self.cursor += 1;
        }
        step
    }
}

/// Recognizer that always reports the same text (for offline runs and tests).
pub struct FixedRecognizer {
    pub text: String,
}

impl FixedRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextRecognizer for FixedRecognizer {
    fn recognize(&mut self, _image: &image::GrayImage) -> anyhow::Result<Vec<TextSpan>> {
        if self.text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![TextSpan {
            text: self.text.clone(),
            confidence: 1.0,
            bounding_box: am_ocr::BoundingBox {
                x: 0,
                y: 0,
                width: 100,
                height: 30,
            },
        }])
    }
}

/// Recognizer that never finds text.
#[derive(Debug, Default)]
pub struct NullRecognizer;

impl TextRecognizer for NullRecognizer {
    fn recognize(&mut self, _image: &image::GrayImage) -> anyhow::Result<Vec<TextSpan>> {
        Ok(Vec::new())
    }
}
