pub mod calculus;
pub mod error;
pub mod expr;
pub mod normalize;
pub mod parser;
pub mod rational;
pub mod solver;

pub use error::MathError;
pub use expr::Expr;
pub use normalize::normalize_expression;
pub use rational::Rational;
pub use solver::{ExpressionSolver, OperationMode, SolveOutcome};
