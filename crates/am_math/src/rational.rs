use std::fmt;

use crate::error::MathError;

/// Exact rational number (`num / den`, den > 0, always reduced).
///
/// Keeps arithmetic exact through parsing, simplification and root finding so
/// `1/2 + 1/2` prints as `1` and not `0.9999...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    num: i64,
    den: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs().max(1)
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    pub fn new(num: i64, den: i64) -> Result<Self, MathError> {
        if den == 0 {
            return Err(MathError::DivisionByZero);
        }
        // i64::MIN has no positive counterpart; rejecting it keeps abs/neg safe.
        if num == i64::MIN || den == i64::MIN {
            return Err(MathError::Overflow);
        }
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Ok(Self { num: -num, den: -den })
        } else {
            Ok(Self { num, den })
        }
    }

    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.num
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.den
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub fn add(&self, other: &Rational) -> Result<Rational, MathError> {
        let num = self
            .num
            .checked_mul(other.den)
            .zip(other.num.checked_mul(self.den))
            .and_then(|(a, b)| a.checked_add(b))
            .ok_or(MathError::Overflow)?;
        let den = self.den.checked_mul(other.den).ok_or(MathError::Overflow)?;
        Rational::new(num, den)
    }

    pub fn sub(&self, other: &Rational) -> Result<Rational, MathError> {
        let num = self
            .num
            .checked_mul(other.den)
            .zip(other.num.checked_mul(self.den))
            .and_then(|(a, b)| a.checked_sub(b))
            .ok_or(MathError::Overflow)?;
        let den = self.den.checked_mul(other.den).ok_or(MathError::Overflow)?;
        Rational::new(num, den)
    }

    pub fn mul(&self, other: &Rational) -> Result<Rational, MathError> {
        let num = self.num.checked_mul(other.num).ok_or(MathError::Overflow)?;
        let den = self.den.checked_mul(other.den).ok_or(MathError::Overflow)?;
        Rational::new(num, den)
    }

    pub fn div(&self, other: &Rational) -> Result<Rational, MathError> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let num = self.num.checked_mul(other.den).ok_or(MathError::Overflow)?;
        let den = self.den.checked_mul(other.num).ok_or(MathError::Overflow)?;
        Rational::new(num, den)
    }

    pub fn neg(&self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }

    /// Raise to an integer power. Negative exponents invert; `0^-n` fails.
    ///
    /// Zero and unit bases short-circuit so huge exponents terminate; any other
    /// base overflows (and errors) within a bounded number of steps.
    pub fn pow(&self, exp: i64) -> Result<Rational, MathError> {
        if exp < 0 {
            if self.is_zero() {
                return Err(MathError::DivisionByZero);
            }
            return Rational::new(self.den, self.num)?.pow(-exp);
        }
        if exp == 0 {
            return Ok(Rational::ONE);
        }
        if self.is_zero() {
            return Ok(Rational::ZERO);
        }
        if self.den == 1 && (self.num == 1 || self.num == -1) {
            return Ok(if self.num == 1 || exp % 2 == 0 {
                Rational::ONE
            } else {
                *self
            });
        }
        let mut out = Rational::ONE;
        for _ in 0..exp {
            out = out.mul(self)?;
        }
        Ok(out)
    }

    /// Exact square root, if both numerator and denominator are perfect squares.
    pub fn sqrt_exact(&self) -> Option<Rational> {
        if self.num < 0 {
            return None;
        }
        let n = isqrt(self.num)?;
        let d = isqrt(self.den)?;
        Some(Rational { num: n, den: d })
    }

    /// Parse an integer or decimal literal ("42", "3.5") exactly.
    pub fn parse_literal(text: &str) -> Option<Rational> {
        if let Ok(n) = text.parse::<i64>() {
            return Some(Rational::integer(n));
        }
        let (whole, frac) = text.split_once('.')?;
        if !frac.chars().all(|c| c.is_ascii_digit()) || frac.is_empty() {
            return None;
        }
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let frac_digits: i64 = frac.parse().ok()?;
        let scale = 10_i64.checked_pow(frac.len() as u32)?;
        let num = whole.checked_mul(scale)?.checked_add(frac_digits)?;
        Rational::new(num, scale).ok()
    }
}

fn isqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let r = (n as f64).sqrt().round() as i64;
    for candidate in [r - 1, r, r + 1] {
        if candidate >= 0 && candidate * candidate == n {
            return Some(candidate);
        }
    }
    None
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_reduces() {
        let half = Rational::new(1, 2).unwrap();
        let sum = half.add(&half).unwrap();
        assert_eq!(sum, Rational::ONE);
        assert_eq!(sum.to_string(), "1");
    }

    #[test]
    fn sign_lives_in_the_numerator() {
        let r = Rational::new(3, -6).unwrap();
        assert_eq!(r.numerator(), -1);
        assert_eq!(r.denominator(), 2);
        assert_eq!(r.to_string(), "-1/2");
    }

    #[test]
    fn decimal_literals_are_exact() {
        assert_eq!(
            Rational::parse_literal("3.5"),
            Some(Rational::new(7, 2).unwrap())
        );
        assert_eq!(Rational::parse_literal("42"), Some(Rational::integer(42)));
        assert_eq!(Rational::parse_literal("1.2.3"), None);
    }

    #[test]
    fn exact_square_roots() {
        assert_eq!(
            Rational::new(9, 4).unwrap().sqrt_exact(),
            Some(Rational::new(3, 2).unwrap())
        );
        assert_eq!(Rational::integer(2).sqrt_exact(), None);
        assert_eq!(Rational::integer(-4).sqrt_exact(), None);
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        let big = Rational::integer(i64::MAX);
        assert_eq!(big.mul(&Rational::integer(2)), Err(MathError::Overflow));
        assert_eq!(big.add(&Rational::ONE), Err(MathError::Overflow));
        assert_eq!(Rational::integer(10).pow(40), Err(MathError::Overflow));
        assert_eq!(Rational::new(i64::MIN, 1), Err(MathError::Overflow));
    }

    #[test]
    fn unit_bases_take_huge_exponents() {
        assert_eq!(Rational::ONE.pow(i64::MAX), Ok(Rational::ONE));
        assert_eq!(
            Rational::integer(-1).pow(i64::MAX),
            Ok(Rational::integer(-1))
        );
        assert_eq!(Rational::ZERO.pow(i64::MAX), Ok(Rational::ZERO));
    }

    #[test]
    fn zero_division_is_an_error() {
        assert_eq!(Rational::new(1, 0), Err(MathError::DivisionByZero));
        assert_eq!(
            Rational::ONE.div(&Rational::ZERO),
            Err(MathError::DivisionByZero)
        );
    }
}
