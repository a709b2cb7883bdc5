/// One normalized landmark position (0.0..1.0 in both axes, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormPoint {
    pub x: f32,
    pub y: f32,
}

impl NormPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Thresholds for the finger up/down decision.
pub mod defaults {
    /// Thumb tip must sit this far left of its base (x axis) to count as up.
    pub const THUMB_MARGIN: f32 = 0.02;
    /// Finger tip must sit this far above its middle joint (y axis) to count as up.
    pub const FINGER_MARGIN: f32 = 0.03;
}

/// One hand's 21 landmarks for a single frame, as reported by the pose collaborator.
///
/// Read-only to this crate; only the handful of indices below are interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [NormPoint; 21],
}

impl HandLandmarks {
    pub const THUMB_BASE: usize = 2;
    pub const THUMB_TIP: usize = 4;
    /// Drawing/pointing anchor.
    pub const INDEX_TIP: usize = 8;

    /// Tips of index, middle, ring, pinky.
    pub const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
    /// Middle joints (PIP) of index, middle, ring, pinky.
    pub const FINGER_MIDS: [usize; 4] = [6, 10, 14, 18];

    pub const fn new(points: [NormPoint; 21]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn point(&self, index: usize) -> NormPoint {
        self.points[index]
    }

    /// The index fingertip, used as the drawing anchor.
    #[inline]
    pub fn fingertip(&self) -> NormPoint {
        self.points[Self::INDEX_TIP]
    }
}

/// Per-frame up/down state of the five fingers (thumb, index, middle, ring, pinky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    fingers: [bool; 5],
}

impl FingerState {
    pub const fn new(fingers: [bool; 5]) -> Self {
        Self { fingers }
    }

    /// Derive finger states from one hand's landmarks.
    ///
    /// Thumb: tip left of base by more than a margin. Other fingers: tip above the
    /// middle joint by more than a margin (smaller y is higher on screen).
    pub fn from_landmarks(landmarks: &HandLandmarks) -> Self {
        let thumb_tip = landmarks.point(HandLandmarks::THUMB_TIP);
        let thumb_base = landmarks.point(HandLandmarks::THUMB_BASE);

        let mut fingers = [false; 5];
        fingers[0] = thumb_tip.x < thumb_base.x - defaults::THUMB_MARGIN;

        for (i, (&tip, &mid)) in HandLandmarks::FINGER_TIPS
            .iter()
            .zip(HandLandmarks::FINGER_MIDS.iter())
            .enumerate()
        {
            fingers[i + 1] = landmarks.point(tip).y < landmarks.point(mid).y - defaults::FINGER_MARGIN;
        }

        Self { fingers }
    }

    #[inline]
    pub fn count_up(&self) -> usize {
        self.fingers.iter().filter(|&&up| up).count()
    }

    #[inline]
    pub fn thumb(&self) -> bool {
        self.fingers[0]
    }

    #[inline]
    pub fn index(&self) -> bool {
        self.fingers[1]
    }

    #[inline]
    pub fn middle(&self) -> bool {
        self.fingers[2]
    }

    #[inline]
    pub fn ring(&self) -> bool {
        self.fingers[3]
    }

    #[inline]
    pub fn pinky(&self) -> bool {
        self.fingers[4]
    }
}
