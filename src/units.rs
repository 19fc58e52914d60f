//! SI-suffixed number parsing for command-line values.

/// Parse a value with an optional SI suffix.
///
/// Supports: f (femto), p (pico), n (nano), u/µ (micro), m (milli),
/// k/K (kilo), M (mega), G (giga), T (tera). Plain numbers, including
/// exponents and `inf`, are tried first.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(v) = text.parse::<f64>() {
        return Some(v);
    }

    let last = text.chars().last()?;
    let multiplier = match last {
        'f' => 1e-15,
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        'T' => 1e12,
        _ => return None,
    };
    let num_str = &text[..text.len() - last.len_utf8()];
    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value() {
        assert_relative_eq!(parse_value("10k").unwrap(), 10_000.0);
        assert_relative_eq!(parse_value("100n").unwrap(), 100e-9, max_relative = 1e-12);
        assert_relative_eq!(parse_value("4.7u").unwrap(), 4.7e-6, max_relative = 1e-12);
        assert_relative_eq!(parse_value("1M").unwrap(), 1_000_000.0);
        assert_relative_eq!(parse_value("2.2").unwrap(), 2.2);
        assert_relative_eq!(parse_value("1e-9").unwrap(), 1e-9);
        assert_relative_eq!(parse_value("-5m").unwrap(), -5e-3, max_relative = 1e-12);
        assert_eq!(parse_value("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("10x"), None);
        assert_eq!(parse_value("k"), None);
    }
}
