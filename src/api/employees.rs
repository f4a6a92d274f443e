//! `/usuario` endpoints, mirroring the browser client's employee service.

use super::client::ApiClient;
use crate::errors::AppResult;
use crate::models::employee::{
    Employee, EmployeeFilter, EmployeeIdLookup, PasswordChange, SetPassword,
};
use crate::models::page::Page;

pub fn detail(api: &ApiClient, id: i64) -> AppResult<Employee> {
    api.get_json(&format!("/usuario/{id}"))
}

/// The employee tied to the caller's credentials.
pub fn my_user(api: &ApiClient) -> AppResult<Employee> {
    api.get_json("/usuario/miusuario")
}

pub fn update(api: &ApiClient, id: i64, employee: &Employee) -> AppResult<()> {
    api.put_unit(&format!("/usuario/{id}"), employee)
}

pub fn delete(api: &ApiClient, id: i64) -> AppResult<()> {
    api.delete(&format!("/usuario/{id}"))
}

pub fn page_filtered(
    api: &ApiClient,
    filter: &EmployeeFilter,
    page: u64,
    size: u64,
    order: &str,
    asc: bool,
) -> AppResult<Page<Employee>> {
    api.post_json(
        &format!("/usuario/pagesFiltered?page={page}&size={size}&order={order}&asc={asc}"),
        filter,
    )
}

pub fn list_filtered(api: &ApiClient, filter: &EmployeeFilter) -> AppResult<Vec<Employee>> {
    api.post_json("/usuario/listFiltered", filter)
}

/// Self-service password change.
pub fn change_password(api: &ApiClient, id: i64, change: &PasswordChange) -> AppResult<()> {
    api.put_unit(&format!("/usuario/password/{id}"), change)
}

/// Admin: reset the password and send it by email.
pub fn reset_password(api: &ApiClient, id: i64) -> AppResult<()> {
    api.post_empty(&format!("/admin/usuarios/{id}/reset-password"))
}

/// Admin: set a password manually.
pub fn set_password(api: &ApiClient, id: i64, password: &str) -> AppResult<()> {
    api.post_unit(
        &format!("/admin/usuarios/{id}/set-password"),
        &SetPassword { password: password.to_string() },
    )
}

/// Public id lookup by employee number, as used by the kiosk client.
pub fn id_by_number(api: &ApiClient, numero: &str) -> AppResult<i64> {
    let found: EmployeeIdLookup = api.get_json(&format!("/public/usuario/id/{numero}"))?;
    Ok(found.id)
}
