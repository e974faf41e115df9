//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - record index
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number

use rand::Rng;
use seedgen_core::FieldValue;

/// Expand a pattern's placeholders left to right.
///
/// Unknown tokens and unterminated braces pass through verbatim, so a
/// pattern that contains literal braces still renders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> FieldValue {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);

        let Some(len) = rest[open..].find('}') else {
            out.push_str(&rest[open..]);
            return FieldValue::Text(out);
        };

        let token = &rest[open + 1..open + len];
        match token {
            "index" => out.push_str(&index.to_string()),
            "uuid" => out.push_str(&super::uuid::uuid_from_rng(rng).to_string()),
            _ => match token.strip_prefix("rand:").and_then(|n| n.parse().ok()) {
                Some(digits) => push_random_digits(&mut out, rng, digits),
                None => out.push_str(&rest[open..=open + len]),
            },
        }

        rest = &rest[open + len + 1..];
    }
    out.push_str(rest);

    FieldValue::Text(out)
}

/// Append a random number with exactly N digits.
///
/// The first digit is 1-9 so the number never carries a leading zero.
fn push_random_digits<R: Rng>(out: &mut String, rng: &mut R, digits: usize) {
    if digits == 0 {
        return;
    }

    out.push(char::from_digit(rng.gen_range(1..10), 10).unwrap());
    for _ in 1..digits {
        out.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    #[test]
    fn test_generate_pattern_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}@example.com", &mut rng, 123);

        assert_eq!(value, FieldValue::from("user_123@example.com"));
    }

    #[test]
    fn test_generate_pattern_uuid() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("id-{uuid}", &mut rng, 0);

        let s = value.as_text().unwrap();
        assert!(s.starts_with("id-"));
        assert_eq!(s.len(), 3 + 36); // "id-" + UUID
        assert!(Uuid::parse_str(&s[3..]).is_ok());
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{rand:6}", &mut rng, 0);

        let s = value.as_text().unwrap();
        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6); // "code-" + 6 digits
        assert!(s[5..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}_code_{rand:4}", &mut rng, 42);

        let s = value.as_text().unwrap();
        assert!(s.starts_with("user_42_code_"));
        assert_eq!(s.len(), 13 + 4);
    }

    #[test]
    fn test_random_digits_have_no_leading_zero() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let s = generate_pattern("{rand:8}", &mut rng, 0)
                .as_text()
                .unwrap()
                .to_string();
            assert_eq!(s.len(), 8);
            assert_ne!(s.chars().next(), Some('0'));
        }
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_pattern("{word}-{rand:x}-{index}", &mut rng, 9);
        assert_eq!(value, FieldValue::from("{word}-{rand:x}-9"));
    }

    #[test]
    fn test_unterminated_brace_passes_through() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_pattern("user_{index}_{rand:4", &mut rng, 1);
        assert_eq!(value, FieldValue::from("user_1_{rand:4"));
    }
}
