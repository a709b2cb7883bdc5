use crate::error::MathError;
use crate::expr::Expr;
use crate::rational::Rational;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(Rational),
    Var,
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
}

fn tokenize(text: &str) -> Result<Vec<Token>, MathError> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                // `**` is exponentiation, `*` multiplication.
                if bytes.get(i + 1) == Some(&b'*') {
                    tokens.push(Token::Pow);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '^' => {
                tokens.push(Token::Pow);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < bytes.len() && ((bytes[i] as char).is_ascii_digit() || bytes[i] == b'.')
                {
                    i += 1;
                }
                let literal = &text[start..i];
                let value = Rational::parse_literal(literal)
                    .ok_or_else(|| MathError::Parse(literal.to_string()))?;
                tokens.push(Token::Num(value));
            }
            'x' => {
                tokens.push(Token::Var);
                i += 1;
            }
            other => return Err(MathError::Parse(other.to_string())),
        }
    }
    Ok(tokens)
}

/// Precedence-climbing parser over `+ - * / **` with unary minus and parentheses.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, MathError> {
        let mut lhs = self.parse_prefix()?;
        loop {
            let (prec, right_assoc) = match self.peek() {
                Some(Token::Plus | Token::Minus) => (1, false),
                Some(Token::Star | Token::Slash) => (2, false),
                Some(Token::Pow) => (3, true),
                _ => break,
            };
            if prec < min_prec {
                break;
            }
            let op = self.next().ok_or(MathError::UnexpectedEnd)?;
            let next_min = if right_assoc { prec } else { prec + 1 };
            let rhs = self.parse_expr(next_min)?;
            lhs = match op {
                Token::Plus => Expr::add(lhs, rhs),
                Token::Minus => Expr::sub(lhs, rhs),
                Token::Star => Expr::mul(lhs, rhs),
                Token::Slash => Expr::div(lhs, rhs),
                Token::Pow => Expr::pow(lhs, rhs),
                _ => unreachable!(),
            };
        }
        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, MathError> {
        match self.next() {
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::Var) => Ok(Expr::Var),
            Some(Token::Minus) => {
                // Unary minus binds tighter than +/- but looser than `**`,
                // so -x**2 parses as -(x**2).
                let inner = self.parse_expr(2)?;
                Ok(Expr::neg(inner))
            }
            Some(Token::Plus) => self.parse_prefix(),
            Some(Token::LParen) => {
                let inner = self.parse_expr(0)?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(MathError::Parse(format!("{tok:?}"))),
                    None => Err(MathError::UnexpectedEnd),
                }
            }
            Some(tok) => Err(MathError::Parse(format!("{tok:?}"))),
            None => Err(MathError::UnexpectedEnd),
        }
    }
}

/// Parse an expression string over the single free variable `x`.
pub fn parse(text: &str) -> Result<Expr, MathError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(MathError::UnexpectedEnd);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;
    if parser.pos != parser.tokens.len() {
        return Err(MathError::Parse(format!(
            "{:?}",
            parser.tokens[parser.pos]
        )));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_precedence() {
        let e = parse("2+3*4").unwrap();
        assert_eq!(e.eval().unwrap(), Rational::integer(14));
    }

    #[test]
    fn power_is_right_associative() {
        // 2**3**2 = 2**9 = 512
        let e = parse("2**3**2").unwrap();
        assert_eq!(e.eval().unwrap(), Rational::integer(512));
    }

    #[test]
    fn caret_is_power_too() {
        let e = parse("2^10").unwrap();
        assert_eq!(e.eval().unwrap(), Rational::integer(1024));
    }

    #[test]
    fn unary_minus_binds_below_power() {
        let e = parse("-2**2").unwrap();
        assert_eq!(e.eval().unwrap(), Rational::integer(-4));
    }

    #[test]
    fn parentheses_override_precedence() {
        let e = parse("(2+3)*4").unwrap();
        assert_eq!(e.eval().unwrap(), Rational::integer(20));
    }

    #[test]
    fn variable_round_trips() {
        let e = parse("x**2+1").unwrap();
        assert!(e.contains_var());
        assert_eq!(e.to_string(), "x**2 + 1");
    }

    #[test]
    fn trailing_operator_is_an_error() {
        assert!(matches!(parse("x+"), Err(MathError::UnexpectedEnd)));
    }

    #[test]
    fn unknown_characters_are_errors() {
        assert!(matches!(parse("x+y"), Err(MathError::Parse(_))));
        assert!(matches!(parse("sin(x)"), Err(MathError::Parse(_))));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse(""), Err(MathError::UnexpectedEnd)));
        assert!(matches!(parse("   "), Err(MathError::UnexpectedEnd)));
    }

    #[test]
    fn dangling_paren_is_an_error() {
        assert!(parse("(x+1").is_err());
        assert!(parse("x+1)").is_err());
    }
}
