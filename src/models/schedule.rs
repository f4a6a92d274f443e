use serde::{Deserialize, Serialize};

/// Weekday as the backend numbers it: 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weekday(pub u8);

impl Weekday {
    pub fn parse(s: &str) -> Option<Self> {
        match s.parse::<u8>() {
            Ok(n) if (1..=7).contains(&n) => Some(Weekday(n)),
            _ => None,
        }
    }

    /// Backend display names (the catalog the browser client ships).
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "Lunes",
            2 => "Martes",
            3 => "Miércoles",
            4 => "Jueves",
            5 => "Viernes",
            6 => "Sábado",
            _ => "Domingo",
        }
    }

    pub fn all() -> [Weekday; 7] {
        [1, 2, 3, 4, 5, 6, 7].map(Weekday)
    }
}

/// One shift within a weekday (`TurnoDTO` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    #[serde(rename = "turnoNumero")]
    pub turno_numero: u32,
    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,
    #[serde(rename = "horaFin")]
    pub hora_fin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Stored schedule row (`HorarioUsuario` on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "usuarioId")]
    pub usuario_id: i64,
    #[serde(rename = "usuarioNombre", default)]
    pub usuario_nombre: Option<String>,
    #[serde(rename = "diaSemana")]
    pub dia_semana: u8,
    #[serde(rename = "diaSemanaDescripcion", default)]
    pub dia_semana_descripcion: Option<String>,
    #[serde(rename = "turnoNumero")]
    pub turno_numero: u32,
    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,
    #[serde(rename = "horaFin")]
    pub hora_fin: String,
    #[serde(default)]
    pub activo: Option<bool>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Create/replace body for `POST /horarios/usuario/{id}/dia/{d}`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleUpdate {
    #[serde(rename = "usuarioId")]
    pub usuario_id: i64,
    #[serde(rename = "diaSemana")]
    pub dia_semana: u8,
    pub turnos: Vec<Shift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Offered timezone catalog, as the browser client ships it. Any other
/// valid IANA name is accepted too; this is only the suggestion list.
pub const TIMEZONE_CATALOG: &[(&str, &str)] = &[
    ("Europe/Madrid", "Madrid/Barcelona (CET/CEST)"),
    ("UTC", "Coordinated Universal Time"),
    ("Europe/London", "London (GMT/BST)"),
    ("Europe/Paris", "Paris (CET/CEST)"),
    ("Europe/Rome", "Rome (CET/CEST)"),
    ("Europe/Berlin", "Berlin (CET/CEST)"),
    ("America/New_York", "New York (EST/EDT)"),
    ("America/Los_Angeles", "Los Angeles (PST/PDT)"),
    ("America/Mexico_City", "Mexico City (CST/CDT)"),
    ("America/Buenos_Aires", "Buenos Aires (ART)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_parse_range() {
        assert_eq!(Weekday::parse("1"), Some(Weekday(1)));
        assert_eq!(Weekday::parse("7"), Some(Weekday(7)));
        assert_eq!(Weekday::parse("0"), None);
        assert_eq!(Weekday::parse("8"), None);
        assert_eq!(Weekday::parse("lunes"), None);
    }

    #[test]
    fn schedule_update_serializes_wire_names() {
        let upd = ScheduleUpdate {
            usuario_id: 7,
            dia_semana: 3,
            turnos: vec![Shift {
                turno_numero: 1,
                hora_inicio: "09:00".into(),
                hora_fin: "13:00".into(),
                descripcion: None,
            }],
            timezone: Some("Europe/Madrid".into()),
        };
        let json = serde_json::to_value(&upd).unwrap();
        assert_eq!(json["usuarioId"], 7);
        assert_eq!(json["diaSemana"], 3);
        assert_eq!(json["turnos"][0]["horaInicio"], "09:00");
        assert!(json["turnos"][0].get("descripcion").is_none());
    }

    #[test]
    fn entry_deserializes_wire_names() {
        let entry: ScheduleEntry = serde_json::from_str(
            r#"{"id":3,"usuarioId":7,"diaSemana":1,"turnoNumero":2,
                "horaInicio":"14:00:00","horaFin":"18:00:00",
                "descripcion":"tarde"}"#,
        )
        .unwrap();
        assert_eq!(entry.usuario_id, 7);
        assert_eq!(entry.turno_numero, 2);
        assert_eq!(entry.descripcion.as_deref(), Some("tarde"));
    }
}
