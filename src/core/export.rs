//! Export flow: fetch the filtered event list and write it locally.

use crate::api::ApiClient;
use crate::core::events::EventLogic;
use crate::errors::AppResult;
use crate::export::{self, EventExport, ExportFormat};
use crate::models::clock_event::ClockEventFilter;
use chrono_tz::Tz;

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        api: &ApiClient,
        filter: &ClockEventFilter,
        format: &ExportFormat,
        file: &str,
        force: bool,
        zone: Tz,
    ) -> AppResult<()> {
        let views = EventLogic::list(api, filter, zone)?;
        let rows: Vec<EventExport> = views.iter().map(EventExport::from).collect();
        export::write(format, file, &rows, force)
    }
}
