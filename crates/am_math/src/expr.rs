use std::fmt;

use crate::error::MathError;
use crate::rational::Rational;

/// Symbolic expression over a single free variable `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(Rational),
    /// The default free variable.
    Var,
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
}

// Construction helpers; these do not simplify.
impl Expr {
    pub fn num(n: i64) -> Expr {
        Expr::Num(Rational::integer(n))
    }

    pub fn add(a: Expr, b: Expr) -> Expr {
        Expr::Add(Box::new(a), Box::new(b))
    }

    pub fn sub(a: Expr, b: Expr) -> Expr {
        Expr::Sub(Box::new(a), Box::new(b))
    }

    pub fn mul(a: Expr, b: Expr) -> Expr {
        Expr::Mul(Box::new(a), Box::new(b))
    }

    pub fn div(a: Expr, b: Expr) -> Expr {
        Expr::Div(Box::new(a), Box::new(b))
    }

    pub fn pow(a: Expr, b: Expr) -> Expr {
        Expr::Pow(Box::new(a), Box::new(b))
    }

    pub fn neg(a: Expr) -> Expr {
        Expr::Neg(Box::new(a))
    }

    /// True if the free variable occurs anywhere in the tree.
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Var => true,
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.contains_var() || b.contains_var(),
            Expr::Neg(a) => a.contains_var(),
        }
    }

    /// Evaluate a variable-free expression to an exact rational.
    pub fn eval(&self) -> Result<Rational, MathError> {
        match self {
            Expr::Num(n) => Ok(*n),
            Expr::Var => Err(MathError::NotNumeric),
            Expr::Add(a, b) => a.eval()?.add(&b.eval()?),
            Expr::Sub(a, b) => a.eval()?.sub(&b.eval()?),
            Expr::Mul(a, b) => a.eval()?.mul(&b.eval()?),
            Expr::Div(a, b) => a.eval()?.div(&b.eval()?),
            Expr::Pow(a, b) => {
                let base = a.eval()?;
                let exp = b.eval()?;
                if !exp.is_integer() {
                    return Err(MathError::Unsupported(
                        "fractional exponents".to_string(),
                    ));
                }
                base.pow(exp.numerator())
            }
            Expr::Neg(a) => Ok(a.eval()?.neg()),
        }
    }

    /// Structural simplification: constant folding and identity elimination.
    ///
    /// Applied bottom-up after differentiation/integration so power-rule output
    /// like `2*x**1*1` collapses to `2*x`.
    pub fn simplify(&self) -> Result<Expr, MathError> {
        Ok(match self {
            Expr::Num(_) | Expr::Var => self.clone(),
            Expr::Add(a, b) => {
                match (a.simplify()?, b.simplify()?) {
                    (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.add(&y)?),
                    (Expr::Num(z), rhs) if z.is_zero() => rhs,
                    (lhs, Expr::Num(z)) if z.is_zero() => lhs,
                    // Prefer `e - c` over `e + -c` in printed output.
                    (lhs, Expr::Num(n)) if n.is_negative() => {
                        Expr::sub(lhs, Expr::Num(n.neg()))
                    }
                    (lhs, rhs) => Expr::add(lhs, rhs),
                }
            }
            Expr::Sub(a, b) => match (a.simplify()?, b.simplify()?) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.sub(&y)?),
                (lhs, Expr::Num(z)) if z.is_zero() => lhs,
                (Expr::Num(z), rhs) if z.is_zero() => Expr::neg(rhs).simplify()?,
                (lhs, rhs) => Expr::sub(lhs, rhs),
            },
            Expr::Mul(a, b) => match (a.simplify()?, b.simplify()?) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.mul(&y)?),
                (Expr::Num(z), _) | (_, Expr::Num(z)) if z.is_zero() => {
                    Expr::Num(Rational::ZERO)
                }
                (Expr::Num(o), rhs) if o == Rational::ONE => rhs,
                (lhs, Expr::Num(o)) if o == Rational::ONE => lhs,
                // Fold a constant factor into a quotient: c*(p/q) -> (c*p)/q.
                (Expr::Num(c), Expr::Div(p, q)) => {
                    Expr::div(Expr::mul(Expr::Num(c), *p), *q).simplify()?
                }
                // Merge stacked constant factors: c*(d*e) -> (c*d)*e.
                (Expr::Num(c), Expr::Mul(p, q)) => {
                    if let Expr::Num(d) = p.as_ref() {
                        Expr::mul(Expr::Num(c.mul(d)?), (*q).clone()).simplify()?
                    } else {
                        Expr::mul(Expr::Num(c), Expr::Mul(p, q))
                    }
                }
                // Constants read better on the left: `x*2` -> `2*x`.
                (lhs, Expr::Num(n)) => Expr::mul(Expr::Num(n), lhs),
                (lhs, rhs) => Expr::mul(lhs, rhs),
            },
            Expr::Div(a, b) => match (a.simplify()?, b.simplify()?) {
                (_, Expr::Num(z)) if z.is_zero() => {
                    return Err(MathError::DivisionByZero);
                }
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.div(&y)?),
                (Expr::Num(z), _) if z.is_zero() => Expr::Num(Rational::ZERO),
                (lhs, Expr::Num(o)) if o == Rational::ONE => lhs,
                // (c*e)/d -> (c/d)*e, so 2*x**2/2 collapses to x**2.
                (Expr::Mul(p, q), Expr::Num(d)) => {
                    if let Expr::Num(c) = p.as_ref() {
                        Expr::mul(Expr::Num(c.div(&d)?), (*q).clone()).simplify()?
                    } else {
                        Expr::div(Expr::Mul(p, q), Expr::Num(d))
                    }
                }
                // (p/c)/d -> p/(c*d).
                (Expr::Div(p, q), Expr::Num(d)) => {
                    if let Expr::Num(c) = q.as_ref() {
                        Expr::div((*p).clone(), Expr::Num(c.mul(&d)?)).simplify()?
                    } else {
                        Expr::div(Expr::Div(p, q), Expr::Num(d))
                    }
                }
                (lhs, rhs) => Expr::div(lhs, rhs),
            },
            Expr::Pow(a, b) => match (a.simplify()?, b.simplify()?) {
                (Expr::Num(x), Expr::Num(y)) if y.is_integer() => {
                    Expr::Num(x.pow(y.numerator())?)
                }
                (_, Expr::Num(z)) if z.is_zero() => Expr::Num(Rational::ONE),
                (lhs, Expr::Num(o)) if o == Rational::ONE => lhs,
                (lhs, rhs) => Expr::pow(lhs, rhs),
            },
            Expr::Neg(a) => {
                let a = a.simplify()?;
                match a {
                    Expr::Num(n) => Expr::Num(n.neg()),
                    Expr::Neg(inner) => *inner,
                    _ => Expr::neg(a),
                }
            }
        })
    }
}

// Printing follows the conventional `**` notation with minimal parenthesization.
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_POW: u8 = 3;
const PREC_ATOM: u8 = 4;

impl Expr {
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, min_prec: u8) -> fmt::Result {
        let prec = match self {
            Expr::Num(n) if n.is_negative() || !n.is_integer() => PREC_MUL,
            Expr::Num(_) | Expr::Var => PREC_ATOM,
            Expr::Add(..) | Expr::Sub(..) => PREC_ADD,
            Expr::Mul(..) | Expr::Div(..) | Expr::Neg(..) => PREC_MUL,
            Expr::Pow(..) => PREC_POW,
        };
        if prec < min_prec {
            write!(f, "(")?;
            self.fmt_prec(f, 0)?;
            return write!(f, ")");
        }
        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::Var => write!(f, "x"),
            Expr::Add(a, b) => {
                a.fmt_prec(f, PREC_ADD)?;
                write!(f, " + ")?;
                b.fmt_prec(f, PREC_ADD)
            }
            Expr::Sub(a, b) => {
                a.fmt_prec(f, PREC_ADD)?;
                write!(f, " - ")?;
                b.fmt_prec(f, PREC_ADD + 1)
            }
            Expr::Mul(a, b) => {
                a.fmt_prec(f, PREC_MUL)?;
                write!(f, "*")?;
                b.fmt_prec(f, PREC_MUL + 1)
            }
            Expr::Div(a, b) => {
                a.fmt_prec(f, PREC_MUL)?;
                write!(f, "/")?;
                b.fmt_prec(f, PREC_MUL + 1)
            }
            Expr::Pow(a, b) => {
                a.fmt_prec(f, PREC_POW + 1)?;
                write!(f, "**")?;
                b.fmt_prec(f, PREC_POW)
            }
            Expr::Neg(a) => {
                write!(f, "-")?;
                a.fmt_prec(f, PREC_MUL + 1)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_rule_residue_collapses() {
        // 2 * x**1 * 1, the raw shape of d/dx x**2.
        let raw = Expr::mul(
            Expr::mul(Expr::num(2), Expr::pow(Expr::Var, Expr::num(1))),
            Expr::num(1),
        );
        assert_eq!(raw.simplify().unwrap().to_string(), "2*x");
    }

    #[test]
    fn printing_uses_minimal_parentheses() {
        let e = Expr::div(Expr::pow(Expr::Var, Expr::num(2)), Expr::num(2));
        assert_eq!(e.to_string(), "x**2/2");

        let e = Expr::mul(Expr::add(Expr::Var, Expr::num(1)), Expr::num(2));
        assert_eq!(e.to_string(), "(x + 1)*2");

        let e = Expr::pow(Expr::mul(Expr::num(2), Expr::Var), Expr::num(2));
        assert_eq!(e.to_string(), "(2*x)**2");

        let e = Expr::sub(Expr::Var, Expr::sub(Expr::Var, Expr::num(1)));
        assert_eq!(e.to_string(), "x - (x - 1)");
    }

    #[test]
    fn negative_constants_become_subtraction() {
        let e = Expr::add(Expr::Var, Expr::num(-3));
        assert_eq!(e.simplify().unwrap().to_string(), "x - 3");
    }

    #[test]
    fn eval_is_exact() {
        let e = Expr::add(
            Expr::div(Expr::num(1), Expr::num(2)),
            Expr::div(Expr::num(1), Expr::num(2)),
        );
        assert_eq!(e.eval().unwrap(), Rational::ONE);
    }

    #[test]
    fn eval_rejects_the_variable() {
        let e = Expr::add(Expr::Var, Expr::num(1));
        assert_eq!(e.eval(), Err(MathError::NotNumeric));
    }

    #[test]
    fn zero_exponent_folds_to_one() {
        let e = Expr::pow(Expr::Var, Expr::num(0));
        assert_eq!(e.simplify().unwrap(), Expr::num(1));
    }
}
