use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::core::distance::DistanceTable;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Add or update the work session for a date.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        location,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse times (mandatory; duration validation happens in the core)
        //
        let start_parsed = parse_required_time(start)?;
        let end_parsed = parse_required_time(end)?;

        //
        // 3. Location defaults from config
        //
        let loc_final = location
            .clone()
            .unwrap_or_else(|| cfg.default_location.clone());

        //
        // 4. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let distances = DistanceTable::from_config(cfg);

        AddLogic::apply(&mut pool, d, start_parsed, end_parsed, loc_final, &distances)?;
    }

    Ok(())
}
