//! Clock-event flows: detail with local-time projection, edits converted
//! back to naive UTC, deletion and listings.

use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::{ClockEventFilter, ClockEventUpdate, ClockEventView};
use crate::models::page::Page;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};
use crate::utils::tz;
use chrono_tz::Tz;

/// Edits collected from the command line, expressed in the display zone.
#[derive(Debug, Default)]
pub struct EventEdit {
    /// Local date, `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub dia_local: Option<String>,
    /// Local time, `HH:MM[:SS]`.
    pub hora_local: Option<String>,
    pub tipo: Option<String>,
    pub origen: Option<String>,
}

impl EventEdit {
    pub fn is_empty(&self) -> bool {
        self.dia_local.is_none()
            && self.hora_local.is_none()
            && self.tipo.is_none()
            && self.origen.is_none()
    }
}

pub struct EventLogic;

impl EventLogic {
    pub fn detail(api: &ApiClient, id: i64, zone: Tz) -> AppResult<ClockEventView> {
        let event = api::events::detail(api, id)?;
        Ok(ClockEventView::from_event(event, zone))
    }

    pub fn show(view: &ClockEventView) {
        let ev = &view.event;
        println!("id:        {}", ev.id.map_or("-".into(), |v| v.to_string()));
        println!("employee:  #{} {}", ev.numero_usuario, ev.nombre_usuario);
        println!("type:      {}", ev.tipo);
        println!("origin:    {}", ev.origen.as_deref().unwrap_or("-"));
        println!("utc:       {} {}", ev.dia, ev.hora);
        println!("local:     {} {}", view.dia_local, view.hora_local);
    }

    /// Apply edits on top of the stored record. The user edits local wall
    /// time; the full pair is re-derived and converted back to naive UTC
    /// before the update is sent.
    pub fn update(api: &ApiClient, id: i64, edit: &EventEdit, zone: Tz) -> AppResult<()> {
        if edit.is_empty() {
            warning("Nothing to update");
            return Ok(());
        }

        let view = Self::detail(api, id, zone)?;

        let dia_local = edit.dia_local.clone().unwrap_or_else(|| view.dia_local.clone());
        let hora_local = edit.hora_local.clone().unwrap_or_else(|| view.hora_local.clone());
        let (dia, hora) = tz::local_pair_to_utc(&dia_local, &hora_local, zone)?;

        let update = ClockEventUpdate {
            dia,
            hora,
            tipo: edit.tipo.clone().unwrap_or_else(|| view.event.tipo.clone()),
            origen: match &edit.origen {
                Some(o) => Some(o.clone()),
                None => view.event.origen.clone(),
            },
        };
        api::events::update(api, id, &update)?;
        success("Changes saved");
        Ok(())
    }

    pub fn delete(api: &ApiClient, id: i64, confirmed: bool) -> AppResult<()> {
        if !confirmed {
            return Err(AppError::NotConfirmed(
                "Deleting a clock event cannot be undone; pass --yes to confirm".into(),
            ));
        }
        api::events::delete(api, id)?;
        warning("Clock event deleted");
        Ok(())
    }

    pub fn page(
        api: &ApiClient,
        filter: &ClockEventFilter,
        page: u64,
        size: u64,
        order: &str,
        asc: bool,
        zone: Tz,
    ) -> AppResult<Page<ClockEventView>> {
        let raw = api::events::page_filtered(api, filter, page, size, order, asc)?;
        Ok(raw.map(|ev| ClockEventView::from_event(ev, zone)))
    }

    pub fn list(
        api: &ApiClient,
        filter: &ClockEventFilter,
        zone: Tz,
    ) -> AppResult<Vec<ClockEventView>> {
        let raw = api::events::list_filtered(api, filter)?;
        Ok(raw.into_iter().map(|ev| ClockEventView::from_event(ev, zone)).collect())
    }

    pub fn render_page(page: &Page<ClockEventView>) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("EMPLOYEE", 8),
            Column::new("NAME", 20),
            Column::new("TYPE", 8),
            Column::new("LOCAL DAY", 10),
            Column::new("LOCAL TIME", 10),
            Column::new("ORIGIN", 6),
        ]);
        for view in &page.content {
            let ev = &view.event;
            table.add_row(vec![
                ev.id.map_or(String::new(), |v| v.to_string()),
                ev.numero_usuario.clone(),
                ev.nombre_usuario.clone(),
                ev.tipo.clone(),
                view.dia_local.clone(),
                view.hora_local.clone(),
                ev.origen.clone().unwrap_or_default(),
            ]);
        }
        format!("{}{}\n", table.render(), page.footer())
    }
}

/// Build the filter body from the listing flags. Date bounds are naive
/// UTC days, matching what the backend compares against.
pub fn filter_from(
    numero: Option<String>,
    tipo: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> AppResult<ClockEventFilter> {
    for d in [&from, &to].into_iter().flatten() {
        if crate::utils::date::parse_date(d).is_none() {
            return Err(AppError::InvalidDate(d.clone()));
        }
    }
    Ok(ClockEventFilter {
        numero_usuario: numero.unwrap_or_default(),
        tipo: tipo.unwrap_or_default(),
        dia_desde: from.unwrap_or_default(),
        dia_hasta: to.unwrap_or_default(),
        ..Default::default()
    })
}
