//! Employee profile flows: detail, edit, delete, password management and
//! listings.

use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeFilter, PasswordChange};
use crate::models::page::Page;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};

/// Field edits collected from the command line; `None` leaves the stored
/// value untouched.
#[derive(Debug, Default)]
pub struct ProfileEdit {
    pub numero: Option<String>,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub en_vacaciones: Option<bool>,
    pub de_baja: Option<bool>,
}

impl ProfileEdit {
    pub fn is_empty(&self) -> bool {
        self.numero.is_none()
            && self.nombre.is_none()
            && self.email.is_none()
            && self.dni.is_none()
            && self.en_vacaciones.is_none()
            && self.de_baja.is_none()
    }

    /// Merge the edits onto a fetched record, read-modify-write style: the
    /// backend expects the full entity on update.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(v) = &self.numero {
            employee.numero = v.clone();
        }
        if let Some(v) = &self.nombre {
            employee.nombre_empleado = v.clone();
        }
        if let Some(v) = &self.email {
            employee.email = v.clone();
        }
        if let Some(v) = &self.dni {
            employee.dni = v.clone();
        }
        if let Some(v) = self.en_vacaciones {
            employee.en_vacaciones = Some(v);
        }
        if let Some(v) = self.de_baja {
            employee.de_baja = Some(v);
        }
    }
}

pub struct ProfileLogic;

impl ProfileLogic {
    /// Resolve the target record: explicit id, or the caller's own.
    pub fn fetch(api: &ApiClient, id: Option<i64>) -> AppResult<Employee> {
        match id {
            Some(id) => api::employees::detail(api, id),
            None => api::employees::my_user(api),
        }
    }

    pub fn show(employee: &Employee) {
        println!("id:        {}", employee.id.map_or("-".into(), |v| v.to_string()));
        println!("number:    {}", employee.numero);
        println!("name:      {}", employee.nombre_empleado);
        println!("email:     {}", employee.email);
        println!("dni:       {}", employee.dni);
        println!(
            "vacation:  {} .. {}",
            employee.dias_vacaciones_desde.as_deref().unwrap_or("-"),
            employee.dias_vacaciones_hasta.as_deref().unwrap_or("-")
        );
        println!(
            "accrued:   {} .. {}",
            employee.horas_generadas_desde.as_deref().unwrap_or("-"),
            employee.horas_generadas_hasta.as_deref().unwrap_or("-")
        );
        println!("on leave:  {}", flag(employee.de_baja));
        println!("vacations: {}", flag(employee.en_vacaciones));
        println!("working:   {}", if employee.is_working() { "IN" } else { "OUT" });
    }

    pub fn update(api: &ApiClient, id: i64, edit: &ProfileEdit) -> AppResult<()> {
        if edit.is_empty() {
            warning("Nothing to update");
            return Ok(());
        }
        let mut employee = api::employees::detail(api, id)?;
        edit.apply_to(&mut employee);
        api::employees::update(api, id, &employee)?;
        success("Changes saved");
        Ok(())
    }

    pub fn delete(api: &ApiClient, id: i64, confirmed: bool) -> AppResult<()> {
        if !confirmed {
            return Err(AppError::NotConfirmed(
                "Deleting an employee cannot be undone; pass --yes to confirm".into(),
            ));
        }
        api::employees::delete(api, id)?;
        warning("Employee deleted");
        Ok(())
    }

    pub fn change_password(api: &ApiClient, id: i64, old: &str, new: &str) -> AppResult<()> {
        api::employees::change_password(
            api,
            id,
            &PasswordChange { old_password: old.to_string(), new_password: new.to_string() },
        )?;
        success("Password changed");
        Ok(())
    }

    pub fn reset_password(api: &ApiClient, id: i64) -> AppResult<()> {
        api::employees::reset_password(api, id)?;
        success("Password reset and sent by email");
        Ok(())
    }

    pub fn set_password(api: &ApiClient, id: i64, password: &str) -> AppResult<()> {
        api::employees::set_password(api, id, password)?;
        success("Password set");
        Ok(())
    }

    pub fn render_page(page: &Page<Employee>) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("NUMBER", 8),
            Column::new("NAME", 24),
            Column::new("EMAIL", 28),
            Column::new("STATE", 5),
        ]);
        for e in &page.content {
            table.add_row(vec![
                e.id.map_or(String::new(), |v| v.to_string()),
                e.numero.clone(),
                e.nombre_empleado.clone(),
                e.email.clone(),
                if e.is_working() { "IN" } else { "OUT" }.to_string(),
            ]);
        }
        format!("{}{}\n", table.render(), page.footer())
    }
}

fn flag(v: Option<bool>) -> &'static str {
    match v {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

/// Empty filter used by the paged listing when no criteria are given.
pub fn filter_from(
    numero: Option<String>,
    nombre: Option<String>,
    email: Option<String>,
    working: Option<bool>,
) -> EmployeeFilter {
    EmployeeFilter {
        numero: numero.unwrap_or_default(),
        nombre_empleado: nombre.unwrap_or_default(),
        email: email.unwrap_or_default(),
        working,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_merges_only_given_fields() {
        let mut e = Employee {
            numero: "0042".into(),
            nombre_empleado: "Ana Garcia".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        };
        let edit = ProfileEdit { email: Some("ana@corp.example".into()), ..Default::default() };
        edit.apply_to(&mut e);
        assert_eq!(e.email, "ana@corp.example");
        assert_eq!(e.numero, "0042");
        assert_eq!(e.nombre_empleado, "Ana Garcia");
    }

    #[test]
    fn empty_edit_detected() {
        assert!(ProfileEdit::default().is_empty());
        let edit = ProfileEdit { dni: Some("X".into()), ..Default::default() };
        assert!(!edit.is_empty());
    }

    #[test]
    fn filter_defaults_are_empty_strings() {
        let f = filter_from(None, None, None, None);
        assert_eq!(f.numero, "");
        assert_eq!(f.working, None);
    }
}
