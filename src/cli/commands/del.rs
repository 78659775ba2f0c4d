use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, summary, yes } = cmd {
        //
        // Summary deletion
        //
        if let Some(id) = summary {
            if !*yes
                && !confirm(&format!(
                    "Delete period summary #{}? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            return DeleteLogic::summary(&mut pool, *id);
        }

        //
        // Entry deletion by date
        //
        let date_str = date
            .as_ref()
            .ok_or_else(|| AppError::Other("Specify a date or --summary <ID>.".into()))?;
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        if !*yes
            && !confirm(&format!(
                "Delete the entry for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::entry(&mut pool, d)?;
    }

    Ok(())
}
