use serde::{Deserialize, Serialize};

/// Step of the estimate selector; valid values run from [`MIN_HOURS`] to
/// [`MAX_HOURS`] in quarter-hour increments.
pub const HOURS_STEP: f64 = 0.25;
pub const MIN_HOURS: f64 = 1.0;
pub const MAX_HOURS: f64 = 12.0;

/// Work-duration estimate sent once per clock-in (`POST /api/estimaciones`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(rename = "usuarioId")]
    pub usuario_id: i64,
    #[serde(rename = "horasEstimadas")]
    pub horas_estimadas: f64,
    /// Submission timestamp, naive UTC ISO string.
    pub fecha: String,
}

impl Estimate {
    pub fn new(usuario_id: i64, horas_estimadas: f64, fecha: String) -> Self {
        Self { usuario_id, horas_estimadas, fecha }
    }
}

/// Check an hour count against the selector domain: 1.0..=12.0, quarter
/// steps only.
pub fn is_valid_hours(hours: f64) -> bool {
    if !(MIN_HOURS..=MAX_HOURS).contains(&hours) {
        return false;
    }
    let quarters = hours / HOURS_STEP;
    (quarters - quarters.round()).abs() < 1e-9
}

/// All selectable hour values, ascending.
pub fn allowed_hours() -> Vec<f64> {
    let mut out = Vec::new();
    let mut h = MIN_HOURS;
    while h <= MAX_HOURS {
        out.push(h);
        h += HOURS_STEP;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_steps_are_valid() {
        for h in [1.0, 1.25, 4.0, 7.75, 12.0] {
            assert!(is_valid_hours(h), "{h} should be valid");
        }
    }

    #[test]
    fn out_of_range_or_off_grid_rejected() {
        for h in [0.5, 0.0, 12.25, 13.0, 4.1, 3.33] {
            assert!(!is_valid_hours(h), "{h} should be rejected");
        }
    }

    #[test]
    fn allowed_hours_cover_full_selector() {
        let hours = allowed_hours();
        assert_eq!(hours.first(), Some(&1.0));
        assert_eq!(hours.last(), Some(&12.0));
        assert_eq!(hours.len(), 45);
    }

    #[test]
    fn estimate_serializes_wire_names() {
        let e = Estimate::new(7, 4.5, "2025-07-30T06:58:00".into());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["usuarioId"], 7);
        assert_eq!(json["horasEstimadas"], 4.5);
        assert_eq!(json["fecha"], "2025-07-30T06:58:00");
    }
}
