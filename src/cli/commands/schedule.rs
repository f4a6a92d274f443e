use crate::api::{self, ApiClient};
use crate::cli::parser::ScheduleCmd;
use crate::config::Config;
use crate::core::schedule::{parse_shift_spec, ScheduleLogic};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{Weekday, TIMEZONE_CATALOG};
use crate::ui::messages::{info, warning};
use crate::utils::tz;

fn parse_day(s: &str) -> AppResult<Weekday> {
    Weekday::parse(s).ok_or_else(|| AppError::InvalidWeekday(s.to_string()))
}

pub fn handle(cmd: &ScheduleCmd, cfg: &Config) -> AppResult<()> {
    // Catalog commands work offline.
    match cmd {
        ScheduleCmd::Days => {
            for day in Weekday::all() {
                println!("{} {}", day.0, day.name());
            }
            return Ok(());
        }
        ScheduleCmd::Zones => {
            for (id, description) in TIMEZONE_CATALOG {
                println!("{id:<22} {description}");
            }
            return Ok(());
        }
        _ => {}
    }

    let api = ApiClient::new(cfg)?;

    match cmd {
        ScheduleCmd::Show { employee, day } => {
            if !api::schedules::has_schedule(&api, *employee)? {
                info("No shifts stored");
                return Ok(());
            }
            let entries = match day {
                Some(d) => api::schedules::by_employee_and_day(&api, *employee, parse_day(d)?)?,
                None => api::schedules::by_employee(&api, *employee)?,
            };
            if entries.is_empty() {
                info("No shifts stored for that day");
            } else {
                print!("{}", ScheduleLogic::render(&entries));
            }
        }

        ScheduleCmd::Set { employee, day, shifts, timezone } => {
            let day = parse_day(day)?;

            // Validate the tag before it travels; the backend stores it as-is.
            let tag = timezone.clone().unwrap_or_else(|| cfg.timezone.clone());
            tz::parse_zone(&tag)?;

            let parsed: AppResult<Vec<_>> = shifts
                .iter()
                .enumerate()
                .map(|(i, spec)| parse_shift_spec(spec, i as u32 + 1))
                .collect();
            ScheduleLogic::save_day(&api, *employee, day, parsed?, Some(tag))?;
        }

        ScheduleCmd::Del { id } => {
            let row = api::schedules::by_id(&api, *id)?;
            api::schedules::delete(&api, *id)?;
            warning(format!(
                "Deleted shift {} of employee {} ({})",
                row.turno_numero,
                row.usuario_id,
                Weekday(row.dia_semana).name()
            ));
        }

        ScheduleCmd::List => {
            let entries = api::schedules::all_active(&api)?;
            if entries.is_empty() {
                info("No active schedules");
            } else {
                print!("{}", ScheduleLogic::render(&entries));
            }
        }

        ScheduleCmd::Who { day } => {
            let employees = api::schedules::employees_with_schedule(&api, parse_day(day)?)?;
            if employees.is_empty() {
                info("Nobody has shifts on that day");
            } else {
                for e in employees {
                    println!("{}", e.summary());
                }
            }
        }

        ScheduleCmd::Days | ScheduleCmd::Zones => unreachable!("handled above"),
    }
    Ok(())
}
