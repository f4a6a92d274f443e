//! Time utilities: parsing HH:MM[:SS] strings and normalizing them to the
//! backend's wire format.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Normalize user input to `HH:MM:SS` as the backend expects.
pub fn normalize_time(t: &str) -> Option<String> {
    parse_time(t).map(|p| p.format("%H:%M:%S").to_string())
}

/// Short `HH:MM` rendering for tables.
pub fn short_time(t: &str) -> String {
    if t.len() >= 5 { t[..5].to_string() } else { t.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_seconds() {
        assert!(parse_time("09:00").is_some());
        assert!(parse_time("09:00:30").is_some());
        assert!(parse_time("9h").is_none());
        assert!(parse_time("25:00").is_none());
    }

    #[test]
    fn normalizes_to_wire_format() {
        assert_eq!(normalize_time("09:00").as_deref(), Some("09:00:00"));
        assert_eq!(normalize_time("09:00:30").as_deref(), Some("09:00:30"));
        assert_eq!(normalize_time("bad"), None);
    }

    #[test]
    fn short_time_truncates_seconds() {
        assert_eq!(short_time("09:00:30"), "09:00");
        assert_eq!(short_time("9:00"), "9:00");
    }
}
