use crate::error::MathError;
use crate::expr::Expr;
use crate::rational::Rational;

/// Symbolic derivative with respect to `x`.
pub fn differentiate(expr: &Expr) -> Result<Expr, MathError> {
    derivative(expr)?.simplify()
}

fn derivative(expr: &Expr) -> Result<Expr, MathError> {
    Ok(match expr {
        Expr::Num(_) => Expr::Num(Rational::ZERO),
        Expr::Var => Expr::Num(Rational::ONE),
        Expr::Add(a, b) => Expr::add(derivative(a)?, derivative(b)?),
        Expr::Sub(a, b) => Expr::sub(derivative(a)?, derivative(b)?),
        // Product rule.
        Expr::Mul(a, b) => Expr::add(
            Expr::mul(derivative(a)?, (**b).clone()),
            Expr::mul((**a).clone(), derivative(b)?),
        ),
        // Quotient rule.
        Expr::Div(a, b) => Expr::div(
            Expr::sub(
                Expr::mul(derivative(a)?, (**b).clone()),
                Expr::mul((**a).clone(), derivative(b)?),
            ),
            Expr::pow((**b).clone(), Expr::num(2)),
        ),
        // Power rule with chain factor; only constant exponents are handled.
        Expr::Pow(base, exp) => match exp.as_ref() {
            Expr::Num(n) => Expr::mul(
                Expr::mul(
                    Expr::Num(*n),
                    Expr::pow((**base).clone(), Expr::Num(n.sub(&Rational::ONE)?)),
                ),
                derivative(base)?,
            ),
            _ => {
                return Err(MathError::Unsupported(
                    "derivative of a non-constant exponent".to_string(),
                ));
            }
        },
        Expr::Neg(a) => Expr::neg(derivative(a)?),
    })
}

/// Symbolic antiderivative with respect to `x` (no integration constant).
pub fn integrate(expr: &Expr) -> Result<Expr, MathError> {
    antiderivative(&expr.simplify()?)?.simplify()
}

fn antiderivative(expr: &Expr) -> Result<Expr, MathError> {
    Ok(match expr {
        // c -> c*x
        Expr::Num(n) => Expr::mul(Expr::Num(*n), Expr::Var),
        // x -> x**2/2
        Expr::Var => Expr::div(Expr::pow(Expr::Var, Expr::num(2)), Expr::num(2)),
        Expr::Add(a, b) => Expr::add(antiderivative(a)?, antiderivative(b)?),
        Expr::Sub(a, b) => Expr::sub(antiderivative(a)?, antiderivative(b)?),
        Expr::Neg(a) => Expr::neg(antiderivative(a)?),
        // Constant factors move outside the integral.
        Expr::Mul(a, b) => match (a.as_ref(), b.as_ref()) {
            (Expr::Num(c), e) => Expr::mul(Expr::Num(*c), antiderivative(e)?),
            (e, Expr::Num(c)) => Expr::mul(Expr::Num(*c), antiderivative(e)?),
            _ => {
                return Err(MathError::Unsupported(
                    "integral of a general product".to_string(),
                ));
            }
        },
        Expr::Div(a, b) => match b.as_ref() {
            Expr::Num(c) if !c.is_zero() => Expr::div(antiderivative(a)?, Expr::Num(*c)),
            Expr::Num(_) => return Err(MathError::DivisionByZero),
            _ => {
                return Err(MathError::Unsupported(
                    "integral of a general quotient".to_string(),
                ));
            }
        },
        // x**n -> x**(n+1)/(n+1); the n = -1 case would need a logarithm.
        Expr::Pow(base, exp) => match (base.as_ref(), exp.as_ref()) {
            (Expr::Var, Expr::Num(n)) => {
                let next = n.add(&Rational::ONE)?;
                if next.is_zero() {
                    return Err(MathError::Unsupported(
                        "integral of 1/x".to_string(),
                    ));
                }
                Expr::div(Expr::pow(Expr::Var, Expr::Num(next)), Expr::Num(next))
            }
            _ => {
                return Err(MathError::Unsupported(
                    "integral of a general power".to_string(),
                ));
            }
        },
    })
}
