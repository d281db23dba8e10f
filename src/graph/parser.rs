use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid composition '{formula}' at byte {position}: {details}")]
pub struct ParseError {
    formula: String,
    position: usize,
    details: String,
}

impl ParseError {
    fn new(formula: &str, position: usize, details: impl Into<String>) -> Self {
        Self {
            formula: formula.to_string(),
            position,
            details: details.into(),
        }
    }
}

/// Parses a chemical formula into ordered (symbol, count) pairs.
///
/// An element is an uppercase letter followed by optional lowercase
/// letters, with an optional decimal count (default 1). Parenthesised
/// groups take an optional decimal multiplier and may nest. Repeated
/// symbols merge by summing their counts; the output order is first
/// appearance, which downstream consumers rely on.
///
/// `"Fe2O3"` parses to `[("Fe", 2.0), ("O", 3.0)]`, and
/// `"Li2(CO3)"` to `[("Li", 2.0), ("C", 1.0), ("O", 3.0)]`.
pub fn parse_composition(formula: &str) -> Result<Vec<(String, f64)>, ParseError> {
    let mut pos = 0;
    let parsed = parse_sequence(formula, &mut pos, 0)?;
    if parsed.is_empty() {
        return Err(ParseError::new(formula, 0, "no elements found"));
    }
    Ok(parsed)
}

fn parse_sequence(
    src: &str,
    pos: &mut usize,
    depth: usize,
) -> Result<Vec<(String, f64)>, ParseError> {
    let bytes = src.as_bytes();
    let mut out: Vec<(String, f64)> = Vec::new();

    while *pos < bytes.len() {
        match bytes[*pos] {
            b'(' => {
                let open_pos = *pos;
                *pos += 1;
                let inner = parse_sequence(src, pos, depth + 1)?;
                if *pos >= bytes.len() || bytes[*pos] != b')' {
                    return Err(ParseError::new(src, open_pos, "unbalanced '('"));
                }
                *pos += 1;
                if inner.is_empty() {
                    return Err(ParseError::new(src, open_pos, "empty group"));
                }
                let factor = parse_count(src, pos)?.unwrap_or(1.0);
                for (symbol, amount) in inner {
                    merge(&mut out, &symbol, amount * factor);
                }
            }
            b')' => {
                if depth == 0 {
                    return Err(ParseError::new(src, *pos, "unbalanced ')'"));
                }
                // The matching '(' arm consumes this byte.
                return Ok(out);
            }
            b'A'..=b'Z' => {
                let start = *pos;
                *pos += 1;
                while *pos < bytes.len() && bytes[*pos].is_ascii_lowercase() {
                    *pos += 1;
                }
                let symbol = &src[start..*pos];
                let count = parse_count(src, pos)?.unwrap_or(1.0);
                merge(&mut out, symbol, count);
            }
            b' ' | b'\t' => {
                *pos += 1;
            }
            _ => {
                return Err(ParseError::new(src, *pos, "unexpected character"));
            }
        }
    }

    Ok(out)
}

fn parse_count(src: &str, pos: &mut usize) -> Result<Option<f64>, ParseError> {
    let bytes = src.as_bytes();
    let start = *pos;
    while *pos < bytes.len() && (bytes[*pos].is_ascii_digit() || bytes[*pos] == b'.') {
        *pos += 1;
    }
    if *pos == start {
        return Ok(None);
    }
    let text = &src[start..*pos];
    let value: f64 = text
        .parse()
        .map_err(|_| ParseError::new(src, start, format!("malformed count '{text}'")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ParseError::new(
            src,
            start,
            format!("count '{text}' must be positive"),
        ));
    }
    Ok(Some(value))
}

fn merge(out: &mut Vec<(String, f64)>, symbol: &str, amount: f64) {
    match out.iter_mut().find(|(existing, _)| existing == symbol) {
        Some((_, weight)) => *weight += amount,
        None => out.push((symbol.to_string(), amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_binary_formula() {
        let parsed = parse_composition("Fe2O3").unwrap();
        assert_eq!(
            parsed,
            vec![("Fe".to_string(), 2.0), ("O".to_string(), 3.0)]
        );
    }

    #[test]
    fn missing_count_defaults_to_one() {
        let parsed = parse_composition("LiFeO2").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("Li".to_string(), 1.0),
                ("Fe".to_string(), 1.0),
                ("O".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn parses_fractional_counts() {
        let parsed = parse_composition("Fe2.5O4").unwrap();
        assert_eq!(parsed[0], ("Fe".to_string(), 2.5));
        assert_eq!(parsed[1], ("O".to_string(), 4.0));
    }

    #[test]
    fn expands_parenthesised_groups() {
        let parsed = parse_composition("Ca(OH)2").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("Ca".to_string(), 1.0),
                ("O".to_string(), 2.0),
                ("H".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn expands_nested_groups() {
        let parsed = parse_composition("Mg((OH)2C)3").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("Mg".to_string(), 1.0),
                ("O".to_string(), 6.0),
                ("H".to_string(), 6.0),
                ("C".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn group_multiplier_may_be_fractional() {
        let parsed = parse_composition("TiO2(SiO2)0.5").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("Ti".to_string(), 1.0),
                ("O".to_string(), 3.0),
                ("Si".to_string(), 0.5),
            ]
        );
    }

    #[test]
    fn repeated_symbols_merge_in_first_appearance_order() {
        let parsed = parse_composition("FeOFe2").unwrap();
        assert_eq!(
            parsed,
            vec![("Fe".to_string(), 3.0), ("O".to_string(), 1.0)]
        );
    }

    #[test]
    fn tolerates_interior_whitespace() {
        let parsed = parse_composition("Fe2 O3").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], ("O".to_string(), 3.0));
    }

    #[test]
    fn rejects_empty_formula() {
        assert!(parse_composition("").is_err());
        assert!(parse_composition("   ").is_err());
    }

    #[test]
    fn rejects_leading_lowercase() {
        let err = parse_composition("fe2O3").unwrap_err();
        assert!(err.to_string().contains("unexpected character"));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(parse_composition("2Fe").is_err());
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(parse_composition("(Fe2O3").is_err());
        assert!(parse_composition("Fe2O3)").is_err());
    }

    #[test]
    fn rejects_empty_group() {
        let err = parse_composition("Fe()O").unwrap_err();
        assert!(err.to_string().contains("empty group"));
    }

    #[test]
    fn rejects_zero_count() {
        let err = parse_composition("Fe0O3").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn rejects_malformed_count() {
        let err = parse_composition("Fe1.2.3").unwrap_err();
        assert!(err.to_string().contains("malformed count"));
    }
}
