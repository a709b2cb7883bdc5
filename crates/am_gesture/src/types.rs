/// Discrete hand-posture category derived from a finger up/down vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Index finger up: lay down ink.
    Write,
    /// Index + middle up: erase around the fingertip.
    Erase,
    /// Four or more fingers up: wipe the canvas (one-shot).
    Clear,
    /// Fist: run the recognize/solve pipeline (one-shot).
    Solve,
    /// Index + middle + ring up: move without drawing.
    Hover,
    /// No hand, or no rule matched.
    #[default]
    None,
}

impl Gesture {
    /// Uppercase label shown in the mode display.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Write => "WRITE",
            Gesture::Erase => "ERASE",
            Gesture::Clear => "CLEAR",
            Gesture::Solve => "SOLVE",
            Gesture::Hover => "HOVER",
            Gesture::None => "NONE",
        }
    }
}
