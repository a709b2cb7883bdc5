use std::fmt;

use crate::calculus;
use crate::error::MathError;
use crate::expr::Expr;
use crate::parser::parse;
use crate::rational::Rational;

/// Which operation the user asked for, independent of the gesture stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    #[default]
    Solve,
    Differentiate,
    Integrate,
}

impl OperationMode {
    pub const ALL: [OperationMode; 3] = [
        OperationMode::Solve,
        OperationMode::Differentiate,
        OperationMode::Integrate,
    ];

    /// Label shown in the operation selector.
    pub fn label(&self) -> &'static str {
        match self {
            OperationMode::Solve => "Solve",
            OperationMode::Differentiate => "Differentiate",
            OperationMode::Integrate => "Integrate",
        }
    }
}

/// Result of one solve dispatch, kept symbolic until display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Plain arithmetic (or a simplified symbolic expression).
    Evaluated { expression: String, value: String },
    /// Roots of an equation in `x`.
    Solved { roots: Vec<String> },
    Differentiated { inner: String, derivative: String },
    Integrated { inner: String, antiderivative: String },
    /// Any failure, already phrased for the user.
    Failed { message: String },
}

impl SolveOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SolveOutcome::Failed { .. })
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Evaluated { expression, value } => {
                write!(f, "{expression} = {value}")
            }
            SolveOutcome::Solved { roots } => write!(f, "x = [{}]", roots.join(", ")),
            SolveOutcome::Differentiated { inner, derivative } => {
                write!(f, "d/dx {inner} = {derivative}")
            }
            SolveOutcome::Integrated {
                inner,
                antiderivative,
            } => write!(f, "∫ {inner} dx = {antiderivative} + C"),
            SolveOutcome::Failed { message } => write!(f, "Error: {message}"),
        }
    }
}

/// Dispatches normalized expression text to evaluate/solve/differentiate/integrate.
///
/// Never panics and never propagates an error past its boundary: every failure
/// becomes `SolveOutcome::Failed`, displayable as an `Error: ...` string.
#[derive(Debug, Default)]
pub struct ExpressionSolver;

impl ExpressionSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn solve(&self, text: &str, mode: OperationMode) -> SolveOutcome {
        let cleaned = text.to_lowercase().replace(' ', "");
        match self.dispatch(&cleaned, mode) {
            Ok(outcome) => outcome,
            Err(err) => SolveOutcome::Failed {
                message: err.to_string(),
            },
        }
    }

    fn dispatch(&self, expr: &str, mode: OperationMode) -> Result<SolveOutcome, MathError> {
        // A directive already written into the expression wins over the selector.
        if let Some(inner) = strip_directive(expr, "diff") {
            return differentiate_text(inner);
        }
        if let Some(inner) = strip_directive(expr, "integrate") {
            return integrate_text(inner);
        }

        match mode {
            OperationMode::Differentiate => differentiate_text(expr),
            OperationMode::Integrate => integrate_text(expr),
            OperationMode::Solve => {
                if expr.contains('=') {
                    solve_equation(expr)
                } else {
                    evaluate_text(expr)
                }
            }
        }
    }
}

/// Match `name(<inner>)` and return the inner text.
fn strip_directive<'a>(expr: &'a str, name: &str) -> Option<&'a str> {
    let rest = expr.strip_prefix(name)?;
    let rest = rest.strip_prefix('(')?;
    rest.strip_suffix(')')
}

fn differentiate_text(inner: &str) -> Result<SolveOutcome, MathError> {
    let parsed = parse(inner)?;
    let derivative = calculus::differentiate(&parsed)?;
    Ok(SolveOutcome::Differentiated {
        inner: inner.to_string(),
        derivative: derivative.to_string(),
    })
}

fn integrate_text(inner: &str) -> Result<SolveOutcome, MathError> {
    let parsed = parse(inner)?;
    let antiderivative = calculus::integrate(&parsed)?;
    Ok(SolveOutcome::Integrated {
        inner: inner.to_string(),
        antiderivative: antiderivative.to_string(),
    })
}

fn evaluate_text(expr: &str) -> Result<SolveOutcome, MathError> {
    let simplified = parse(expr)?.simplify()?;
    let value = if simplified.contains_var() {
        simplified.to_string()
    } else {
        simplified.eval()?.to_string()
    };
    Ok(SolveOutcome::Evaluated {
        expression: expr.to_string(),
        value,
    })
}

fn solve_equation(expr: &str) -> Result<SolveOutcome, MathError> {
    let (left, right) = expr
        .split_once('=')
        .ok_or_else(|| MathError::Parse(expr.to_string()))?;
    if right.contains('=') {
        return Err(MathError::Parse(expr.to_string()));
    }

    // Form left - right and read off polynomial coefficients in x.
    let difference = Expr::sub(parse(left)?, parse(right)?);
    let coeffs = poly_coeffs(&difference.simplify()?)?;
    let roots = poly_roots(&coeffs)?;
    Ok(SolveOutcome::Solved { roots })
}

/// Coefficients of a polynomial in `x`, lowest degree first.
fn poly_coeffs(expr: &Expr) -> Result<Vec<Rational>, MathError> {
    let poly = match expr {
        Expr::Num(n) => vec![*n],
        Expr::Var => vec![Rational::ZERO, Rational::ONE],
        Expr::Add(a, b) => poly_add(&poly_coeffs(a)?, &poly_coeffs(b)?, false)?,
        Expr::Sub(a, b) => poly_add(&poly_coeffs(a)?, &poly_coeffs(b)?, true)?,
        Expr::Mul(a, b) => poly_mul(&poly_coeffs(a)?, &poly_coeffs(b)?)?,
        Expr::Div(a, b) => {
            if b.contains_var() {
                return Err(MathError::Unsupported(
                    "division by the variable in an equation".to_string(),
                ));
            }
            let divisor = b.eval()?;
            if divisor.is_zero() {
                return Err(MathError::DivisionByZero);
            }
            poly_coeffs(a)?
                .iter()
                .map(|c| c.div(&divisor))
                .collect::<Result<_, _>>()?
        }
        Expr::Pow(base, exp) => {
            let exp = exp.eval().map_err(|_| {
                MathError::Unsupported("variable exponent in an equation".to_string())
            })?;
            if !exp.is_integer() || exp.is_negative() {
                return Err(MathError::Unsupported(
                    "non-polynomial exponent in an equation".to_string(),
                ));
            }
            if exp.numerator() > 64 {
                return Err(MathError::Unsupported(
                    "equations of degree greater than 2".to_string(),
                ));
            }
            let base = poly_coeffs(base)?;
            let mut out = vec![Rational::ONE];
            for _ in 0..exp.numerator() {
                out = poly_mul(&out, &base)?;
            }
            out
        }
        Expr::Neg(a) => poly_coeffs(a)?.iter().map(|c| c.neg()).collect(),
    };
    Ok(poly)
}

fn poly_add(a: &[Rational], b: &[Rational], negate: bool) -> Result<Vec<Rational>, MathError> {
    let mut out = vec![Rational::ZERO; a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        out[i] = out[i].add(c)?;
    }
    for (i, c) in b.iter().enumerate() {
        let c = if negate { c.neg() } else { *c };
        out[i] = out[i].add(&c)?;
    }
    Ok(out)
}

fn poly_mul(a: &[Rational], b: &[Rational]) -> Result<Vec<Rational>, MathError> {
    let mut out = vec![Rational::ZERO; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] = out[i + j].add(&x.mul(y)?)?;
        }
    }
    Ok(out)
}

/// Solve for the roots of a degree ≤ 2 polynomial, formatted for display.
fn poly_roots(coeffs: &[Rational]) -> Result<Vec<String>, MathError> {
    let mut coeffs = coeffs.to_vec();
    while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
        coeffs.pop();
    }

    match coeffs.len() {
        // Constant: either an identity (0 = 0) or a contradiction; no roots in x
        // to report either way.
        0 | 1 => Ok(Vec::new()),
        2 => {
            let root = coeffs[0].neg().div(&coeffs[1])?;
            Ok(vec![root.to_string()])
        }
        3 => {
            let (c, b, a) = (coeffs[0], coeffs[1], coeffs[2]);
            let disc = b.mul(&b)?.sub(&Rational::integer(4).mul(&a.mul(&c)?)?)?;
            if disc.is_negative() {
                return Err(MathError::Unsupported("complex roots".to_string()));
            }
            let two_a = Rational::integer(2).mul(&a)?;
            match disc.sqrt_exact() {
                Some(sq) if sq.is_zero() => {
                    let root = b.neg().div(&two_a)?;
                    Ok(vec![root.to_string()])
                }
                Some(sq) => {
                    let mut roots = [
                        b.neg().sub(&sq)?.div(&two_a)?,
                        b.neg().add(&sq)?.div(&two_a)?,
                    ];
                    roots.sort_by(|p, q| p.to_f64().total_cmp(&q.to_f64()));
                    Ok(roots.iter().map(|r| r.to_string()).collect())
                }
                None => {
                    let sq = disc.to_f64().sqrt();
                    let mut roots = [
                        (b.neg().to_f64() - sq) / two_a.to_f64(),
                        (b.neg().to_f64() + sq) / two_a.to_f64(),
                    ];
                    roots.sort_by(|p, q| p.total_cmp(q));
                    Ok(roots.iter().map(|r| format_float(*r)).collect())
                }
            }
        }
        _ => Err(MathError::Unsupported(
            "equations of degree greater than 2".to_string(),
        )),
    }
}

fn format_float(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
