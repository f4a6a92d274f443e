//! Weekly-schedule business logic: shift-list validation before
//! submission, plus the save/show flows over the schedule endpoints.

use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{ScheduleUpdate, Shift, Weekday};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};
use crate::utils::time::short_time;

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Pre-submission check: every shift must run forward in time, and no
    /// two shifts of the same day may overlap. Violations name the shift
    /// numbers so the user can fix the right one.
    pub fn validate(shifts: &[Shift]) -> AppResult<()> {
        if shifts.is_empty() {
            return Err(AppError::Schedule("at least one shift is required".into()));
        }

        for shift in shifts {
            if shift.hora_inicio >= shift.hora_fin {
                return Err(AppError::Schedule(format!(
                    "shift {}: start time must be before end time ({} >= {})",
                    shift.turno_numero, shift.hora_inicio, shift.hora_fin
                )));
            }
        }

        for (i, a) in shifts.iter().enumerate() {
            for b in &shifts[i + 1..] {
                if Self::overlaps(a, b) {
                    return Err(AppError::Schedule(format!(
                        "shifts {} and {} overlap",
                        a.turno_numero, b.turno_numero
                    )));
                }
            }
        }

        Ok(())
    }

    /// Standard interval-overlap exclusion on `HH:MM:SS` strings, which
    /// order lexicographically the same as the times they encode.
    fn overlaps(a: &Shift, b: &Shift) -> bool {
        a.hora_inicio < b.hora_fin && b.hora_inicio < a.hora_fin
    }

    /// Validate and store the whole shift list of one employee/weekday.
    pub fn save_day(
        api: &ApiClient,
        usuario_id: i64,
        day: Weekday,
        shifts: Vec<Shift>,
        timezone: Option<String>,
    ) -> AppResult<()> {
        Self::validate(&shifts)?;

        let update = ScheduleUpdate {
            usuario_id,
            dia_semana: day.0,
            turnos: shifts,
            timezone,
        };
        api::schedules::save_day(api, usuario_id, day, &update)?;
        success(format!(
            "Schedule saved for employee {} on {}",
            usuario_id,
            day.name()
        ));
        Ok(())
    }

    /// Render schedule rows grouped by weekday, shifts in their numbered
    /// order.
    pub fn render(entries: &[crate::models::schedule::ScheduleEntry]) -> String {
        let mut sorted: Vec<_> = entries.iter().collect();
        sorted.sort_by_key(|e| (e.dia_semana, e.turno_numero));

        let mut table = Table::new(vec![
            Column::new("DAY", 10),
            Column::new("SHIFT", 5),
            Column::new("FROM", 5),
            Column::new("TO", 5),
            Column::new("TZ", 16),
            Column::new("DESCRIPTION", 24),
        ]);
        for entry in sorted {
            table.add_row(vec![
                Weekday(entry.dia_semana).name().to_string(),
                entry.turno_numero.to_string(),
                short_time(&entry.hora_inicio),
                short_time(&entry.hora_fin),
                entry.timezone.clone().unwrap_or_default(),
                entry.descripcion.clone().unwrap_or_default(),
            ]);
        }
        table.render()
    }
}

/// Parse one `--shift HH:MM-HH:MM[:description]` argument. Shift numbers
/// are assigned by position, starting at 1.
pub fn parse_shift_spec(spec: &str, number: u32) -> AppResult<Shift> {
    let bad = || AppError::InvalidShift(spec.to_string());

    let (start_raw, rest) = spec.split_once('-').ok_or_else(bad)?;

    // rest is "HH:MM" optionally followed by ":description"; the first
    // colon belongs to the time, anything after the second is the text.
    let mut tail = rest.splitn(3, ':');
    let end_h = tail.next().ok_or_else(bad)?;
    let end_m = tail.next().ok_or_else(bad)?;
    let description = tail.next().map(str::to_string);

    let start = crate::utils::time::normalize_time(start_raw).ok_or_else(bad)?;
    let end =
        crate::utils::time::normalize_time(&format!("{end_h}:{end_m}")).ok_or_else(bad)?;

    Ok(Shift {
        turno_numero: number,
        hora_inicio: start,
        hora_fin: end,
        descripcion: description.filter(|d| !d.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(n: u32, start: &str, end: &str) -> Shift {
        Shift {
            turno_numero: n,
            hora_inicio: start.into(),
            hora_fin: end.into(),
            descripcion: None,
        }
    }

    #[test]
    fn disjoint_shifts_are_valid() {
        let shifts = vec![shift(1, "09:00", "13:00"), shift(2, "14:00", "18:00")];
        assert!(ScheduleLogic::validate(&shifts).is_ok());
    }

    #[test]
    fn overlapping_shifts_are_rejected_with_their_numbers() {
        let shifts = vec![shift(1, "09:00", "14:00"), shift(2, "13:00", "18:00")];
        let err = ScheduleLogic::validate(&shifts).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("1") && msg.contains("2") && msg.contains("overlap"), "{msg}");
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let shifts = vec![shift(1, "09:00", "13:00"), shift(2, "13:00", "18:00")];
        assert!(ScheduleLogic::validate(&shifts).is_ok());
    }

    #[test]
    fn zero_length_shift_rejected_regardless_of_overlap() {
        let shifts = vec![shift(1, "09:00", "09:00")];
        assert!(ScheduleLogic::validate(&shifts).is_err());
    }

    #[test]
    fn inverted_shift_rejected() {
        let shifts = vec![shift(1, "14:00", "09:00")];
        let err = ScheduleLogic::validate(&shifts).unwrap_err();
        assert!(err.to_string().contains("shift 1"));
    }

    #[test]
    fn empty_shift_list_rejected() {
        assert!(ScheduleLogic::validate(&[]).is_err());
    }

    #[test]
    fn containment_counts_as_overlap() {
        let shifts = vec![shift(1, "09:00", "18:00"), shift(2, "10:00", "11:00")];
        assert!(ScheduleLogic::validate(&shifts).is_err());
    }

    #[test]
    fn parse_shift_spec_without_description() {
        let s = parse_shift_spec("09:00-13:00", 1).unwrap();
        assert_eq!(s.hora_inicio, "09:00:00");
        assert_eq!(s.hora_fin, "13:00:00");
        assert_eq!(s.descripcion, None);
        assert_eq!(s.turno_numero, 1);
    }

    #[test]
    fn parse_shift_spec_with_description() {
        let s = parse_shift_spec("14:00-18:00:afternoon shift", 2).unwrap();
        assert_eq!(s.hora_inicio, "14:00:00");
        assert_eq!(s.hora_fin, "18:00:00");
        assert_eq!(s.descripcion.as_deref(), Some("afternoon shift"));
    }

    #[test]
    fn parse_shift_spec_rejects_garbage() {
        assert!(parse_shift_spec("nine-to-five", 1).is_err());
        assert!(parse_shift_spec("09:00", 1).is_err());
        assert!(parse_shift_spec("09:00-25:00", 1).is_err());
    }
}
