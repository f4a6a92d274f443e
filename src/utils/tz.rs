//! Timezone normalization helpers.
//!
//! The backend stores clock events as naive `YYYY-MM-DD` / `HH:MM:SS`
//! strings recorded in UTC, with no offset marker. Everything shown to the
//! user is projected into a configured civil timezone using real tzdb
//! rules, so conversions stay correct across DST transitions.
//!
//! Display conversions degrade on unparsable input: the original string is
//! returned unchanged and a warning is printed, never an error.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const DATE_WIRE_FMT: &str = "%Y-%m-%d";
pub const TIME_WIRE_FMT: &str = "%H:%M:%S";
pub const DATE_DISPLAY_FMT: &str = "%d/%m/%Y";

/// Resolve an IANA zone name.
pub fn parse_zone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

fn parse_wire_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_WIRE_FMT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Convert a naive UTC `(dia, hora)` pair into display strings
/// (`DD/MM/YYYY`, `HH:MM:SS`) in the given zone.
pub fn utc_pair_to_local(dia: &str, hora: &str, zone: Tz) -> (String, String) {
    let parsed = NaiveDate::parse_from_str(dia, DATE_WIRE_FMT)
        .ok()
        .zip(parse_wire_time(hora));
    match parsed {
        Some((d, t)) => {
            let local = Utc.from_utc_datetime(&d.and_time(t)).with_timezone(&zone);
            (
                local.format(DATE_DISPLAY_FMT).to_string(),
                local.format(TIME_WIRE_FMT).to_string(),
            )
        }
        None => {
            messages::warning(format!("Unparsable UTC pair '{dia} {hora}', shown as-is"));
            (dia.to_string(), hora.to_string())
        }
    }
}

/// Convert an edited local `(dia, hora)` pair back to the backend's naive
/// UTC representation. Accepts `YYYY-MM-DD` or `DD/MM/YYYY` dates and
/// `HH:MM[:SS]` times. Ambiguous local times (the repeated DST hour)
/// resolve to the earlier instant; nonexistent local times (the skipped
/// hour) are pushed forward past the gap.
pub fn local_pair_to_utc(dia: &str, hora: &str, zone: Tz) -> AppResult<(String, String)> {
    let d = NaiveDate::parse_from_str(dia, DATE_WIRE_FMT)
        .or_else(|_| NaiveDate::parse_from_str(dia, DATE_DISPLAY_FMT))
        .map_err(|_| AppError::InvalidDate(dia.to_string()))?;
    let t = parse_wire_time(hora).ok_or_else(|| AppError::InvalidTime(hora.to_string()))?;

    let utc = resolve_local(d.and_time(t), zone).with_timezone(&Utc);
    Ok((
        utc.format(DATE_WIRE_FMT).to_string(),
        utc.format(TIME_WIRE_FMT).to_string(),
    ))
}

fn resolve_local(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            // Inside a spring-forward gap: step forward until the wall
            // clock exists again (gaps are at most a couple of hours).
            let mut probe = naive;
            loop {
                probe += Duration::minutes(15);
                match zone.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return dt,
                    LocalResult::Ambiguous(earlier, _) => return earlier,
                    LocalResult::None => continue,
                }
            }
        }
    }
}

/// Tolerant one-string conversion: accepts ISO datetimes with or without a
/// trailing `Z`, date-only `YYYY-MM-DD`, or time-only `HH:MM[:SS]` values
/// (today's UTC date is assumed). Output is `DD/MM/YYYY HH:MM:SS` in the
/// given zone; unparsable input comes back unchanged with a warning.
pub fn utc_string_to_local(value: &str, zone: Tz) -> String {
    match parse_utc_string(value) {
        Some(utc) => {
            let local = utc.with_timezone(&zone);
            format!(
                "{} {}",
                local.format(DATE_DISPLAY_FMT),
                local.format(TIME_WIRE_FMT)
            )
        }
        None => {
            messages::warning(format!("Unparsable date '{value}', shown as-is"));
            value.to_string()
        }
    }
}

fn parse_utc_string(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    let trimmed = value.strip_suffix('Z').unwrap_or(value);

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, DATE_WIRE_FMT) {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    if let Some(t) = parse_wire_time(trimmed) {
        let today = Utc::now().date_naive();
        return Some(Utc.from_utc_datetime(&today.and_time(t)));
    }
    None
}

/// Date half of a `DD/MM/YYYY HH:MM:SS` display string.
pub fn extract_local_date(local: &str) -> String {
    local.split(' ').next().unwrap_or("").to_string()
}

/// Time half of a `DD/MM/YYYY HH:MM:SS` display string.
pub fn extract_local_time(local: &str) -> String {
    local.split(' ').nth(1).unwrap_or("").to_string()
}

/// Current instant as the backend's naive UTC ISO string (no `Z`).
pub fn now_utc_string() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Madrid;

    #[test]
    fn summer_pair_is_shifted_two_hours() {
        let (d, t) = utc_pair_to_local("2025-07-30", "15:30:00", Madrid);
        assert_eq!(d, "30/07/2025");
        assert_eq!(t, "17:30:00");
    }

    #[test]
    fn winter_pair_is_shifted_one_hour() {
        let (d, t) = utc_pair_to_local("2025-01-15", "15:30:00", Madrid);
        assert_eq!(d, "15/01/2025");
        assert_eq!(t, "16:30:00");
    }

    #[test]
    fn midnight_rollover_moves_the_date() {
        let (d, t) = utc_pair_to_local("2025-07-30", "23:30:00", Madrid);
        assert_eq!(d, "31/07/2025");
        assert_eq!(t, "01:30:00");
    }

    #[test]
    fn round_trip_is_idempotent_in_both_seasons() {
        for (dia, hora) in [("2025-07-30", "15:30:00"), ("2025-01-15", "15:30:00")] {
            let (ld, lt) = utc_pair_to_local(dia, hora, Madrid);
            let (back_d, back_t) = local_pair_to_utc(&ld, &lt, Madrid).unwrap();
            assert_eq!((back_d.as_str(), back_t.as_str()), (dia, hora));
        }
    }

    #[test]
    fn unparsable_pair_returned_unchanged() {
        let (d, t) = utc_pair_to_local("not-a-date", "15:30:00", Madrid);
        assert_eq!(d, "not-a-date");
        assert_eq!(t, "15:30:00");
    }

    #[test]
    fn unparsable_string_returned_unchanged() {
        assert_eq!(utc_string_to_local("garbage", Madrid), "garbage");
    }

    #[test]
    fn iso_string_with_and_without_z() {
        assert_eq!(
            utc_string_to_local("2025-07-30T15:30:00", Madrid),
            "30/07/2025 17:30:00"
        );
        assert_eq!(
            utc_string_to_local("2025-07-30T15:30:00Z", Madrid),
            "30/07/2025 17:30:00"
        );
    }

    #[test]
    fn date_only_string_is_midnight_utc() {
        // 2025-01-15 00:00 UTC is 01:00 in Madrid
        assert_eq!(
            utc_string_to_local("2025-01-15", Madrid),
            "15/01/2025 01:00:00"
        );
    }

    #[test]
    fn local_to_utc_accepts_display_date_format() {
        let (d, t) = local_pair_to_utc("30/07/2025", "17:30", Madrid).unwrap();
        assert_eq!(d, "2025-07-30");
        assert_eq!(t, "15:30:00");
    }

    #[test]
    fn local_to_utc_rejects_bad_input() {
        assert!(local_pair_to_utc("2025-13-40", "17:30", Madrid).is_err());
        assert!(local_pair_to_utc("2025-07-30", "99:99", Madrid).is_err());
    }

    #[test]
    fn ambiguous_autumn_hour_resolves_to_earlier_instant() {
        // 2025-10-26 02:30 happens twice in Madrid; earlier pass is CEST (+2).
        let (d, t) = local_pair_to_utc("2025-10-26", "02:30:00", Madrid).unwrap();
        assert_eq!(d, "2025-10-26");
        assert_eq!(t, "00:30:00");
    }

    #[test]
    fn nonexistent_spring_hour_is_pushed_forward() {
        // 2025-03-30 02:30 does not exist in Madrid (clocks jump 02:00→03:00).
        let (d, t) = local_pair_to_utc("2025-03-30", "02:30:00", Madrid).unwrap();
        assert_eq!(d, "2025-03-30");
        assert_eq!(t, "01:00:00");
    }

    #[test]
    fn extract_halves_of_display_string() {
        assert_eq!(extract_local_date("30/07/2025 17:30:00"), "30/07/2025");
        assert_eq!(extract_local_time("30/07/2025 17:30:00"), "17:30:00");
        assert_eq!(extract_local_time("30/07/2025"), "");
    }

    #[test]
    fn parse_zone_accepts_catalog_and_rejects_garbage() {
        assert!(parse_zone("Europe/Madrid").is_ok());
        assert!(parse_zone("America/Buenos_Aires").is_ok());
        assert!(parse_zone("Mars/Olympus").is_err());
    }
}
