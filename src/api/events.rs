//! `/fichaje` endpoints, mirroring the browser client's clock-event
//! service.

use super::client::ApiClient;
use crate::errors::AppResult;
use crate::models::clock_event::{ClockEvent, ClockEventFilter, ClockEventUpdate, ClockRequest};
use crate::models::page::Page;

pub fn detail(api: &ApiClient, id: i64) -> AppResult<ClockEvent> {
    api.get_json(&format!("/fichaje/{id}"))
}

pub fn update(api: &ApiClient, id: i64, update: &ClockEventUpdate) -> AppResult<()> {
    api.put_unit(&format!("/fichaje/{id}"), update)
}

pub fn delete(api: &ApiClient, id: i64) -> AppResult<()> {
    api.delete(&format!("/fichaje/{id}"))
}

pub fn page_filtered(
    api: &ApiClient,
    filter: &ClockEventFilter,
    page: u64,
    size: u64,
    order: &str,
    asc: bool,
) -> AppResult<Page<ClockEvent>> {
    api.post_json(
        &format!("/fichaje/pagesFiltered?page={page}&size={size}&order={order}&asc={asc}"),
        filter,
    )
}

/// Unpaged filtered list; feeds the local CSV/JSON export.
pub fn list_filtered(api: &ApiClient, filter: &ClockEventFilter) -> AppResult<Vec<ClockEvent>> {
    api.post_json("/fichaje/listFiltered", filter)
}

/// Register a clock event at the server's current instant. The backend
/// decides whether it is an entry or an exit.
pub fn clock_now(api: &ApiClient, request: &ClockRequest) -> AppResult<()> {
    api.post_unit("/fichaje/now", request)
}
