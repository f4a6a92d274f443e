use serde::{Deserialize, Serialize};

/// Employee record as served by `/usuario`.
///
/// Wire names are the backend's Spanish camelCase fields; every field but
/// the identity block is nullable server-side, so the window/flag fields
/// are all `Option`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub numero: String,
    #[serde(rename = "nombreEmpleado", default)]
    pub nombre_empleado: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub dni: String,
    #[serde(rename = "diasVacacionesDesde", default)]
    pub dias_vacaciones_desde: Option<String>,
    #[serde(rename = "diasVacacionesHasta", default)]
    pub dias_vacaciones_hasta: Option<String>,
    #[serde(rename = "horasGeneradasDesde", default)]
    pub horas_generadas_desde: Option<String>,
    #[serde(rename = "horasGeneradasHasta", default)]
    pub horas_generadas_hasta: Option<String>,
    #[serde(rename = "enVacaciones", default)]
    pub en_vacaciones: Option<bool>,
    #[serde(rename = "deBaja", default)]
    pub de_baja: Option<bool>,
    #[serde(default)]
    pub working: Option<bool>,
}

impl Employee {
    pub fn is_working(&self) -> bool {
        self.working.unwrap_or(false)
    }

    /// One-line summary used by `status` and listings.
    pub fn summary(&self) -> String {
        let state = if self.is_working() { "IN" } else { "OUT" };
        format!("#{} {} <{}> [{}]", self.numero, self.nombre_empleado, self.email, state)
    }
}

/// Filter body for `/usuario/pagesFiltered` and `/usuario/listFiltered`.
/// Empty strings / nulls mean "no filter" server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub email: String,
    pub numero: String,
    #[serde(rename = "nombreEmpleado")]
    pub nombre_empleado: String,
    pub dni: String,
    #[serde(rename = "diasVacacionesDesde")]
    pub dias_vacaciones_desde: Option<String>,
    #[serde(rename = "diasVacacionesHasta")]
    pub dias_vacaciones_hasta: Option<String>,
    #[serde(rename = "horasGeneradasDesde")]
    pub horas_generadas_desde: Option<String>,
    #[serde(rename = "horasGeneradasHasta")]
    pub horas_generadas_hasta: Option<String>,
    #[serde(rename = "enVacaciones")]
    pub en_vacaciones: Option<bool>,
    #[serde(rename = "deBaja")]
    pub de_baja: Option<bool>,
    pub working: Option<bool>,
}

/// Body for `PUT /usuario/password/{id}` (self-service password change).
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Body for `POST /admin/usuarios/{id}/set-password`.
#[derive(Debug, Clone, Serialize)]
pub struct SetPassword {
    pub password: String,
}

/// Response of `GET /public/usuario/id/{numero}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeIdLookup {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_deserializes_backend_wire_names() {
        let raw = r#"{
            "id": 7,
            "numero": "0042",
            "nombreEmpleado": "Ana Garcia",
            "email": "ana@example.com",
            "dni": "12345678Z",
            "enVacaciones": false,
            "deBaja": null,
            "working": true
        }"#;
        let e: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(e.id, Some(7));
        assert_eq!(e.numero, "0042");
        assert_eq!(e.nombre_empleado, "Ana Garcia");
        assert!(e.is_working());
        assert_eq!(e.de_baja, None);
    }

    #[test]
    fn filter_serializes_with_wire_names() {
        let f = EmployeeFilter::default();
        let json = serde_json::to_value(&f).unwrap();
        assert!(json.get("nombreEmpleado").is_some());
        assert!(json.get("diasVacacionesDesde").is_some());
        assert!(json.get("working").is_some());
    }

    #[test]
    fn missing_working_flag_means_not_working() {
        let e: Employee = serde_json::from_str(r#"{"numero":"1"}"#).unwrap();
        assert!(!e.is_working());
    }
}
