use am_canvas::{Canvas, Point};
use am_gesture::Gesture;
use am_math::OperationMode;

use crate::display::SolveReport;
use crate::{Action, Effect};

/// The session state machine.
///
/// Owns the canvas and every mutable session field (mode, writing flag, last
/// fingertip, operation selector, latest result) so independent instances can
/// exist side by side and tests need no shared globals.
///
/// Two cooperating timescales drive it: stabilized gesture events switch modes
/// (slow layer), while every tick's fingertip position lays down or removes ink
/// under the current mode (fast layer). Mode changes must be debounced, but ink
/// has to track the fingertip every frame once a mode is active.
#[derive(Debug)]
pub struct SessionModel {
    canvas: Canvas,
    /// Sticky display mode: the last accepted non-Hover gesture.
    mode: Gesture,
    writing: bool,
    last_point: Option<Point>,
    operation: OperationMode,
    report: Option<SolveReport>,
}

impl SessionModel {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            mode: Gesture::Write,
            writing: false,
            last_point: None,
            operation: OperationMode::Solve,
            report: None,
        }
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Stabilized(gesture) => self.apply_stabilized(gesture),
            Action::Frame { fingertip } => {
                self.apply_frame(fingertip);
                Vec::new()
            }
            Action::SetOperation(op) => {
                self.operation = op;
                Vec::new()
            }
            Action::ClearCanvas => {
                self.canvas.clear();
                self.last_point = None;
                Vec::new()
            }
            Action::SolveCompleted {
                expression,
                outcome,
            } => {
                // Replace, never append.
                self.report = Some(SolveReport::new(self.operation, expression, outcome));
                Vec::new()
            }
            // Nothing recognizable on the canvas: the previous result stays up.
            Action::RecognitionEmpty => Vec::new(),
        }
    }

    /// Slow layer: act on a debounced gesture event.
    fn apply_stabilized(&mut self, gesture: Gesture) -> Vec<Effect> {
        let mut effects = Vec::new();
        match gesture {
            Gesture::Clear => {
                self.canvas.clear();
                self.last_point = None;
                self.writing = false;
            }
            Gesture::Solve => {
                effects.push(Effect::RecognizeCanvas);
                self.writing = false;
            }
            Gesture::Write => self.writing = true,
            // Erase, Hover: moving without inking.
            _ => self.writing = false,
        }

        // Hover suppresses writing but deliberately leaves the displayed mode
        // unchanged; None never reaches this point (the stabilizer drops it).
        if gesture != Gesture::Hover {
            self.mode = gesture;
        }
        effects
    }

    /// Fast layer: couple the fingertip to the canvas under the current mode.
    fn apply_frame(&mut self, fingertip: Option<Point>) {
        let Some(point) = fingertip else {
            // Hand absent: never bridge a segment across the gap.
            self.last_point = None;
            return;
        };

        if self.mode == Gesture::Write && self.writing {
            if let Some(last) = self.last_point {
                self.canvas.draw_segment(last, point);
            }
            self.last_point = Some(point);
        } else if self.mode == Gesture::Erase {
            self.canvas.erase(point);
            self.last_point = None;
        } else {
            self.last_point = None;
        }
    }

    // Read-only display accessors.

    pub fn mode(&self) -> Gesture {
        self.mode
    }

    pub fn is_writing(&self) -> bool {
        self.writing
    }

    pub fn operation(&self) -> OperationMode {
        self.operation
    }

    pub fn report(&self) -> Option<&SolveReport> {
        self.report.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[cfg(test)]
    pub(crate) fn last_point(&self) -> Option<Point> {
        self.last_point
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_math::ExpressionSolver;

    fn write_session() -> SessionModel {
        let mut m = SessionModel::new(Canvas::new(100, 100));
        let eff = m.reduce(Action::Stabilized(Gesture::Write));
        assert!(eff.is_empty());
        m
    }

    #[test]
    fn write_event_starts_inking() {
        let mut m = write_session();
        assert!(m.is_writing());
        assert_eq!(m.mode(), Gesture::Write);

        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(40, 10)),
        });
        assert!(!m.canvas().is_blank());
    }

    #[test]
    fn first_frame_only_anchors_the_stroke() {
        let mut m = write_session();
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        // A single point anchors last_point but draws nothing yet.
        assert_eq!(m.last_point(), Some(Point::new(10, 10)));
        assert!(m.canvas().is_blank());
    }

    #[test]
    fn hover_stops_ink_but_keeps_the_mode() {
        let mut m = write_session();
        m.reduce(Action::Stabilized(Gesture::Hover));
        assert_eq!(m.mode(), Gesture::Write);
        assert!(!m.is_writing());

        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(40, 10)),
        });
        assert!(m.canvas().is_blank());
    }

    #[test]
    fn hand_absence_breaks_the_stroke() {
        let mut m = write_session();
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        m.reduce(Action::Frame { fingertip: None });
        assert_eq!(m.last_point(), None);
    }

    #[test]
    fn erase_clears_last_point_every_frame() {
        let mut m = write_session();
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(40, 10)),
        });

        m.reduce(Action::Stabilized(Gesture::Erase));
        assert_eq!(m.mode(), Gesture::Erase);
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(25, 10)),
        });
        assert_eq!(m.last_point(), None);
        assert_eq!(m.canvas().pixel(25, 10), 0);
    }

    #[test]
    fn clear_event_wipes_the_canvas() {
        let mut m = write_session();
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(10, 10)),
        });
        m.reduce(Action::Frame {
            fingertip: Some(Point::new(40, 10)),
        });
        assert!(!m.canvas().is_blank());

        m.reduce(Action::Stabilized(Gesture::Clear));
        assert!(m.canvas().is_blank());
        assert_eq!(m.mode(), Gesture::Clear);
        assert_eq!(m.last_point(), None);
    }

    #[test]
    fn solve_event_requests_recognition() {
        let mut m = write_session();
        let eff = m.reduce(Action::Stabilized(Gesture::Solve));
        assert_eq!(eff, vec![Effect::RecognizeCanvas]);
        assert!(!m.is_writing());
        assert_eq!(m.mode(), Gesture::Solve);
    }

    #[test]
    fn solve_completed_replaces_the_report() {
        let mut m = write_session();
        let solver = ExpressionSolver::new();

        let outcome = solver.solve("2+2", OperationMode::Solve);
        m.reduce(Action::SolveCompleted {
            expression: "2+2".to_string(),
            outcome,
        });
        let first = m.report().unwrap().to_string();
        assert!(first.contains("2+2 = 4"));

        let outcome = solver.solve("x+2=5", OperationMode::Solve);
        m.reduce(Action::SolveCompleted {
            expression: "x+2=5".to_string(),
            outcome,
        });
        let second = m.report().unwrap().to_string();
        assert!(second.contains("x = [3]"));
        assert!(!second.contains("2+2"));
    }

    #[test]
    fn empty_recognition_preserves_the_previous_report() {
        let mut m = write_session();
        m.reduce(Action::SolveCompleted {
            expression: "2+2".to_string(),
            outcome: ExpressionSolver::new().solve("2+2", OperationMode::Solve),
        });
        m.reduce(Action::RecognitionEmpty);
        assert!(m.report().unwrap().to_string().contains("2+2 = 4"));
    }

    #[test]
    fn operation_selector_is_independent_of_gestures() {
        let mut m = write_session();
        m.reduce(Action::SetOperation(OperationMode::Integrate));
        m.reduce(Action::Stabilized(Gesture::Erase));
        assert_eq!(m.operation(), OperationMode::Integrate);
    }
}
