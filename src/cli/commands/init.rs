use crate::cli::parser::Cli;
use crate::errors::AppResult;

/// Write the initial configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    crate::config::Config::init_all(cli.api_url.clone(), cli.test)?;
    Ok(())
}
