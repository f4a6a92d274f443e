//! `/horarios` endpoints, mirroring the browser client's schedule service.

use super::client::ApiClient;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::schedule::{ScheduleEntry, ScheduleUpdate, Weekday};
use serde::Deserialize;

pub fn by_employee(api: &ApiClient, usuario_id: i64) -> AppResult<Vec<ScheduleEntry>> {
    api.get_json(&format!("/horarios/usuario/{usuario_id}"))
}

pub fn by_employee_and_day(
    api: &ApiClient,
    usuario_id: i64,
    day: Weekday,
) -> AppResult<Vec<ScheduleEntry>> {
    api.get_json(&format!("/horarios/usuario/{usuario_id}/dia/{}", day.0))
}

/// Create or replace the whole shift list of one employee/weekday.
pub fn save_day(
    api: &ApiClient,
    usuario_id: i64,
    day: Weekday,
    update: &ScheduleUpdate,
) -> AppResult<()> {
    api.post_unit(
        &format!("/horarios/usuario/{usuario_id}/dia/{}", day.0),
        update,
    )
}

pub fn delete(api: &ApiClient, horario_id: i64) -> AppResult<()> {
    api.delete(&format!("/horarios/{horario_id}"))
}

pub fn by_id(api: &ApiClient, horario_id: i64) -> AppResult<ScheduleEntry> {
    api.get_json(&format!("/horarios/{horario_id}"))
}

/// All active schedule rows, for admin overviews.
pub fn all_active(api: &ApiClient) -> AppResult<Vec<ScheduleEntry>> {
    api.get_json("/horarios/todos")
}

/// Employees that have at least one shift on the given weekday.
pub fn employees_with_schedule(api: &ApiClient, day: Weekday) -> AppResult<Vec<Employee>> {
    api.get_json(&format!("/horarios/usuarios-con-horario/dia/{}", day.0))
}

#[derive(Debug, Deserialize)]
struct HasScheduleResponse {
    #[serde(rename = "tieneHorarios", default)]
    tiene_horarios: bool,
}

pub fn has_schedule(api: &ApiClient, usuario_id: i64) -> AppResult<bool> {
    let resp: HasScheduleResponse =
        api.get_json(&format!("/horarios/usuario/{usuario_id}/tiene-horarios"))?;
    Ok(resp.tiene_horarios)
}
