use image::GrayImage;

/// Characters the recognizer is allowed to report for handwritten math.
pub const MATH_ALLOWLIST: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+-*/=()";

/// Bounding box of one recognized text block, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One recognized text block (location + text + confidence).
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub text: String,
    pub confidence: f32,
    pub bounding_box: BoundingBox,
}

/// The recognizer collaborator: binarized image in, ordered text spans out.
///
/// The core consumes spans in the order the engine reports them; no spatial
/// reordering is applied (a known limitation for multi-token handwriting).
pub trait TextRecognizer {
    fn recognize(&mut self, image: &GrayImage) -> anyhow::Result<Vec<TextSpan>>;
}

/// Outcome of one recognition pass over the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizedText {
    /// No text found; the solve pipeline aborts without touching the display.
    Empty,
    /// Joined raw text, ready for normalization.
    Text(String),
}

impl RecognizedText {
    /// Join spans with single spaces, in reported order.
    pub fn from_spans(spans: &[TextSpan]) -> Self {
        let joined = spans
            .iter()
            .map(|s| s.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.trim().is_empty() {
            RecognizedText::Empty
        } else {
            RecognizedText::Text(joined)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecognizedText::Empty)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            RecognizedText::Empty => None,
            RecognizedText::Text(t) => Some(t),
        }
    }
}
