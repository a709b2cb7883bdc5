use std::fmt;

use am_gesture::Gesture;
use am_math::{OperationMode, SolveOutcome};

/// The latest solve result, formatted for the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub operation: OperationMode,
    pub expression: String,
    pub outcome: SolveOutcome,
}

impl SolveReport {
    pub fn new(operation: OperationMode, expression: String, outcome: SolveOutcome) -> Self {
        Self {
            operation,
            expression,
            outcome,
        }
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation: {}\nExpression: {}\nResult: {}",
            self.operation.label(),
            self.expression,
            self.outcome
        )
    }
}

/// Status line for the mode display.
pub fn mode_line(mode: Gesture) -> String {
    format!("Current Mode: {}", mode.label())
}

/// Status line for the writing indicator.
pub fn writing_line(writing: bool) -> &'static str {
    if writing {
        "Writing: Started"
    } else {
        "Writing: Stopped"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_math::ExpressionSolver;

    #[test]
    fn report_formats_all_three_lines() {
        let outcome = ExpressionSolver::new().solve("x", OperationMode::Integrate);
        let report = SolveReport::new(OperationMode::Integrate, "x".to_string(), outcome);
        assert_eq!(
            report.to_string(),
            "Operation: Integrate\nExpression: x\nResult: ∫ x dx = x**2/2 + C"
        );
    }

    #[test]
    fn status_lines() {
        assert_eq!(mode_line(Gesture::Erase), "Current Mode: ERASE");
        assert_eq!(writing_line(true), "Writing: Started");
        assert_eq!(writing_line(false), "Writing: Stopped");
    }
}
