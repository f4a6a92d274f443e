use super::employee::Employee;
use crate::utils::tz;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A single clock-in/out record as served by `/fichaje`.
///
/// `dia` (`YYYY-MM-DD`) and `hora` (`HH:MM:SS`) are naive strings the
/// backend records in UTC without any offset marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockEvent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub dia: String,
    #[serde(default)]
    pub hora: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub origen: Option<String>,
    #[serde(rename = "numeroUsuario", default)]
    pub numero_usuario: String,
    #[serde(rename = "nombreUsuario", default)]
    pub nombre_usuario: String,
    #[serde(default)]
    pub usuario: Option<Employee>,
}

/// A clock event enriched with display fields in the configured timezone.
///
/// Mirrors the raw record plus the derived local projections; the raw UTC
/// pair is kept untouched so edits can be diffed against it.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEventView {
    pub event: ClockEvent,
    pub dia_local: String,
    pub hora_local: String,
}

impl ClockEventView {
    /// Derive the local display fields from the raw UTC pair.
    ///
    /// Conversion failures degrade: the original strings are shown
    /// unchanged and a warning is emitted, never an error.
    pub fn from_event(event: ClockEvent, zone: Tz) -> Self {
        let (dia_local, hora_local) = if !event.dia.is_empty() && !event.hora.is_empty() {
            tz::utc_pair_to_local(&event.dia, &event.hora, zone)
        } else if !event.hora.is_empty() {
            let local = tz::utc_string_to_local(&event.hora, zone);
            (tz::extract_local_date(&local), tz::extract_local_time(&local))
        } else {
            (event.dia.clone(), event.hora.clone())
        };
        Self { event, dia_local, hora_local }
    }
}

/// Filter body for `/fichaje/pagesFiltered` and `/fichaje/listFiltered`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockEventFilter {
    #[serde(rename = "diaDesde")]
    pub dia_desde: String,
    #[serde(rename = "diaHasta")]
    pub dia_hasta: String,
    #[serde(rename = "horaDesde")]
    pub hora_desde: String,
    #[serde(rename = "horaHasta")]
    pub hora_hasta: String,
    pub hora: String,
    pub dia: String,
    pub origen: Option<String>,
    pub tipo: String,
    #[serde(rename = "numeroUsuario")]
    pub numero_usuario: String,
    #[serde(rename = "nombreUsuario")]
    pub nombre_usuario: String,
}

/// Flat body for `PUT /fichaje/{id}`: the backend expects only the mutable
/// fields, already converted back to naive UTC.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEventUpdate {
    pub hora: String,
    pub dia: String,
    pub tipo: String,
    pub origen: Option<String>,
}

/// Body for `POST /fichaje/now`. The backend decides the event type, so
/// `tipo` travels empty; `origen` identifies this client.
#[derive(Debug, Clone, Serialize)]
pub struct ClockRequest {
    #[serde(rename = "diaDesde")]
    pub dia_desde: String,
    #[serde(rename = "diaHasta")]
    pub dia_hasta: String,
    #[serde(rename = "horaDesde")]
    pub hora_desde: String,
    #[serde(rename = "horaHasta")]
    pub hora_hasta: String,
    pub hora: String,
    pub dia: String,
    pub origen: Option<String>,
    pub tipo: String,
    #[serde(rename = "numeroUsuario")]
    pub numero_usuario: String,
    #[serde(rename = "nombreUsuario")]
    pub nombre_usuario: String,
}

impl ClockRequest {
    pub fn new(numero_usuario: &str, origin: &str) -> Self {
        Self {
            dia_desde: String::new(),
            dia_hasta: String::new(),
            hora_desde: String::new(),
            hora_hasta: String::new(),
            hora: String::new(),
            dia: String::new(),
            origen: Some(origin.to_string()),
            tipo: String::new(),
            numero_usuario: numero_usuario.to_string(),
            nombre_usuario: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_deserializes_wire_names() {
        let raw = r#"{
            "id": 33,
            "dia": "2025-07-30",
            "hora": "15:30:00",
            "tipo": "ENTRADA",
            "origen": "web",
            "numeroUsuario": "0042",
            "nombreUsuario": "Ana Garcia"
        }"#;
        let ev: ClockEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(ev.id, Some(33));
        assert_eq!(ev.numero_usuario, "0042");
        assert_eq!(ev.origen.as_deref(), Some("web"));
    }

    #[test]
    fn clock_request_carries_origin_and_empty_type() {
        let req = ClockRequest::new("0042", "cli");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["numeroUsuario"], "0042");
        assert_eq!(json["origen"], "cli");
        assert_eq!(json["tipo"], "");
    }

    #[test]
    fn view_degrades_on_missing_fields() {
        let ev = ClockEvent::default();
        let view = ClockEventView::from_event(ev, chrono_tz::Europe::Madrid);
        assert_eq!(view.dia_local, "");
        assert_eq!(view.hora_local, "");
    }

    #[test]
    fn view_converts_utc_pair_to_madrid() {
        let ev = ClockEvent {
            dia: "2025-07-30".into(),
            hora: "15:30:00".into(),
            ..Default::default()
        };
        let view = ClockEventView::from_event(ev, chrono_tz::Europe::Madrid);
        // July: CEST, UTC+2
        assert_eq!(view.dia_local, "30/07/2025");
        assert_eq!(view.hora_local, "17:30:00");
    }
}
