use crate::config::Config;
use crate::core::period::{aggregate, format_bounds, period_bounds};
use crate::db::pool::DbPool;
use crate::db::queries::{get_checkpoint, load_entries};
use crate::errors::AppResult;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, hours2str, km2str};

/// Show running totals and boundaries for the current billing period.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let entries = load_entries(&mut pool)?;
    let checkpoint = get_checkpoint(&pool.conn)?;

    let totals = aggregate(&entries, checkpoint.as_ref());
    let (from, to) = format_bounds(period_bounds(&entries, checkpoint.as_ref()));

    println!("{}", bold("Current period"));
    println!("  From:       {}", colorize_optional(&from));
    println!("  To:         {}", colorize_optional(&to));
    println!("  Hours:      {}", hours2str(totals.total_hours));
    println!("  Kilometers: {}", km2str(totals.total_kilometers));

    match checkpoint {
        Some(t) => println!("  Last reset: {}", t.format("%Y-%m-%d %H:%M")),
        None => println!("  Last reset: never"),
    }

    Ok(())
}
