pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 20.0;

pub fn is_valid_score(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Parses user or file text as a real number. Surrounding whitespace is ignored.
pub fn parse_score(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Shortest text that parses back to the same value, always with a fractional part.
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

/// Trimmed film name, or `None` when nothing but whitespace was given.
pub fn normalize_name(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(is_valid_score(0.0));
        assert!(is_valid_score(20.0));
        assert!(is_valid_score(13.7));
        assert!(!is_valid_score(-0.1));
        assert!(!is_valid_score(20.01));
        assert!(!is_valid_score(f64::NAN));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(" 15.5 "), Some(15.5));
        assert_eq!(parse_score("7"), Some(7.0));
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("12,5"), None);
    }

    #[test]
    fn test_format_score_keeps_fraction() {
        assert_eq!(format_score(15.0), "15.0");
        assert_eq!(format_score(12.3), "12.3");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Barbie "), Some("Barbie".to_string()));
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
    }
}
