use am_canvas::Point;
use am_gesture::Gesture;
use am_math::{OperationMode, SolveOutcome};

pub mod display;
pub mod session;

pub use display::SolveReport;
pub use session::SessionModel;

/// Top-level session actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A gesture survived debouncing (the slow layer).
    Stabilized(Gesture),
    /// One processing tick with the current fingertip, if a hand is present
    /// (the fast layer; fires every frame regardless of stabilization).
    Frame { fingertip: Option<Point> },
    /// User picked an operation from the selector.
    SetOperation(OperationMode),
    /// User pressed the clear-canvas button.
    ClearCanvas,
    /// The solve pipeline finished.
    SolveCompleted {
        expression: String,
        outcome: SolveOutcome,
    },
    /// The solve pipeline found nothing to recognize.
    RecognitionEmpty,
}

/// Effects the host must carry out after a reduce step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run OCR → normalize → solve over the current canvas, synchronously
    /// within this tick, then feed back `SolveCompleted` / `RecognitionEmpty`.
    RecognizeCanvas,
}
