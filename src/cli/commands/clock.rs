use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockOutcome};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a clock event, preceded by a work-duration estimate when the
/// employee is about to clock in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { hours } = cmd {
        let api = ApiClient::new(cfg)?;
        match ClockLogic::apply(&api, *hours, cfg.default_estimate_hours, &cfg.origin)? {
            ClockOutcome::In { estimated_hours } => {
                success(format!("Clocked in (estimated {estimated_hours} h)"));
            }
            ClockOutcome::Out => success("Clocked out"),
        }
    }
    Ok(())
}
