/// Ordered character-confusion table applied to raw OCR output.
///
/// Handwritten math trips OCR in predictable ways: the multiplication sign comes
/// back as `×`, the variable as a capital or Greek lookalike, zeros as the letter
/// O, ones as `l` or `|`. The substitutions run in table order.
const SUBSTITUTIONS: &[(char, char)] = &[
    ('×', '*'),
    ('X', 'x'),
    ('𝑥', 'x'),
    ('χ', 'x'),
    ('O', '0'),
    ('o', '0'),
    ('l', '1'),
    ('|', '1'),
    ('−', '-'),
    ('—', '-'),
    ('–', '-'),
    ('[', '('),
    ('{', '('),
    (']', ')'),
    ('}', ')'),
];

/// Clean raw OCR text into a parseable expression string.
///
/// Pure and deterministic; idempotent on its own output.
pub fn normalize_expression(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    'chars: for c in raw.chars() {
        for &(from, to) in SUBSTITUTIONS {
            if c == from {
                out.push(to);
                continue 'chars;
            }
        }
        out.push(c);
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixes_common_confusions() {
        assert_eq!(normalize_expression("X×2"), "x*2");
        assert_eq!(normalize_expression("2O+l"), "20+1");
        assert_eq!(normalize_expression("[x−1]"), "(x-1)");
        assert_eq!(normalize_expression("{x}—|"), "(x)-1");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_expression("  2+2  "), "2+2");
    }

    #[test]
    fn is_idempotent() {
        for s in ["x*2+1", "X×O−l", "  (x+1)/2 ", ""] {
            let once = normalize_expression(s);
            assert_eq!(normalize_expression(&once), once);
        }
    }

    #[test]
    fn leaves_clean_text_alone() {
        assert_eq!(normalize_expression("x**2+3*x-4"), "x**2+3*x-4");
    }
}
