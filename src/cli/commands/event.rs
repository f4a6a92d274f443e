use crate::api::ApiClient;
use crate::cli::parser::EventCmd;
use crate::config::Config;
use crate::core::events::{self, EventEdit, EventLogic};
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::utils::tz;

pub fn handle(cmd: &EventCmd, cfg: &Config) -> AppResult<()> {
    let zone = tz::parse_zone(&cfg.timezone)?;
    let api = ApiClient::new(cfg)?;

    match cmd {
        EventCmd::Show { id } => {
            let view = EventLogic::detail(&api, *id, zone)?;
            EventLogic::show(&view);
        }

        EventCmd::Edit { id, date, time, kind, origin } => {
            let edit = EventEdit {
                dia_local: date.clone(),
                hora_local: time.clone(),
                tipo: kind.clone(),
                origen: origin.clone(),
            };
            EventLogic::update(&api, *id, &edit, zone)?;
        }

        EventCmd::Del { id, yes } => {
            EventLogic::delete(&api, *id, *yes)?;
        }

        EventCmd::List { page, size, order, desc, number, kind, from, to } => {
            let filter =
                events::filter_from(number.clone(), kind.clone(), from.clone(), to.clone())?;
            let result =
                EventLogic::page(&api, &filter, *page, *size, order, !*desc, zone)?;
            print!("{}", EventLogic::render_page(&result));
        }

        EventCmd::Export { format, file, force, number, kind, from, to } => {
            let filter =
                events::filter_from(number.clone(), kind.clone(), from.clone(), to.clone())?;
            ExportLogic::run(&api, &filter, format, file, *force, zone)?;
        }
    }
    Ok(())
}
