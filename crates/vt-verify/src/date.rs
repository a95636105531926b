//! # Purchase-Date Normalization
//!
//! Sellers type dates by hand and retailers report them in whatever
//! format their order page uses. Normalization maps the two recognized
//! families onto `YYYY-MM-DD`; everything else compares literally.

/// Normalize a date string for comparison.
///
/// - A string starting with an ISO `YYYY-MM-DD` pattern keeps its first
///   10 characters (`2024-03-15T10:00:00Z` → `2024-03-15`).
/// - A string of the exact form `DD[/- ]MM[/- ]YYYY` is rewritten to
///   `YYYY-MM-DD` (`15/03/2024` → `2024-03-15`).
/// - Anything else is returned unchanged; unrecognized formats compare
///   literally.
pub fn normalize_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_iso_prefix(trimmed) {
        return trimmed[..10].to_string();
    }
    if let Some((day, month, year)) = split_day_first(trimmed) {
        return format!("{year}-{month}-{day}");
    }
    trimmed.to_string()
}

/// Whether the string starts with `YYYY-MM-DD`.
fn has_iso_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Split an exact `DD[/- ]MM[/- ]YYYY` string into its parts.
///
/// The two separators may differ (`15/03-2024` is accepted, matching
/// the lenient format observed in retailer order pages).
fn split_day_first(s: &str) -> Option<(&str, &str, &str)> {
    let b = s.as_bytes();
    if b.len() != 10 {
        return None;
    }
    let sep = |c: u8| c == b'/' || c == b'-' || c == b' ';
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
    if digits(0..2) && sep(b[2]) && digits(3..5) && sep(b[5]) && digits(6..10) {
        Some((&s[0..2], &s[3..5], &s[6..10]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp_truncates() {
        assert_eq!(normalize_date("2024-03-15T10:00:00Z"), "2024-03-15");
    }

    #[test]
    fn test_bare_iso_date_unchanged() {
        assert_eq!(normalize_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_day_first_slash() {
        assert_eq!(normalize_date("15/03/2024"), "2024-03-15");
    }

    #[test]
    fn test_day_first_dash_and_space() {
        assert_eq!(normalize_date("15-03-2024"), "2024-03-15");
        assert_eq!(normalize_date("15 03 2024"), "2024-03-15");
    }

    #[test]
    fn test_mixed_separators_accepted() {
        assert_eq!(normalize_date("15/03-2024"), "2024-03-15");
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(normalize_date("March 15"), "March 15");
        assert_eq!(normalize_date("15th of March, 2024"), "15th of March, 2024");
    }

    #[test]
    fn test_single_digit_day_not_recognized() {
        // The day-first form requires two-digit day and month.
        assert_eq!(normalize_date("5/3/2024"), "5/3/2024");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(normalize_date("  2024-03-15  "), "2024-03-15");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_cross_format_equality() {
        assert_eq!(normalize_date("01/01/2024"), normalize_date("2024-01-01T00:00:00Z"));
    }
}
