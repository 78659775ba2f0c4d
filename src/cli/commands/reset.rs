use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};
use chrono::Local;

/// Close the current billing period.
///
/// The reset never runs without explicit intent: either the interactive
/// y/N prompt or the --yes flag.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !confirm(
                "Close the current period? Totals will be archived and the counters start over.",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        ResetLogic::apply(&mut pool, Local::now())?;
    }

    Ok(())
}
