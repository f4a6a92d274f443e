use crate::models::clock_event::ClockEventView;
use serde::Serialize;

/// Flat clock-event record written by the exporters: the raw UTC pair
/// plus the derived local projection, one row per event.
#[derive(Debug, Clone, Serialize)]
pub struct EventExport {
    pub id: Option<i64>,
    pub employee_number: String,
    pub employee_name: String,
    pub kind: String,
    pub origin: String,
    pub utc_day: String,
    pub utc_time: String,
    pub local_day: String,
    pub local_time: String,
}

impl From<&ClockEventView> for EventExport {
    fn from(view: &ClockEventView) -> Self {
        let ev = &view.event;
        Self {
            id: ev.id,
            employee_number: ev.numero_usuario.clone(),
            employee_name: ev.nombre_usuario.clone(),
            kind: ev.tipo.clone(),
            origin: ev.origen.clone().unwrap_or_default(),
            utc_day: ev.dia.clone(),
            utc_time: ev.hora.clone(),
            local_day: view.dia_local.clone(),
            local_time: view.hora_local.clone(),
        }
    }
}
