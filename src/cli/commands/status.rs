use crate::api::{self, ApiClient};
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Show the caller's own record and working state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let api = ApiClient::new(cfg)?;
    let me = api::employees::my_user(&api)?;

    header(me.summary());
    ProfileLogic::show(&me);
    Ok(())
}
