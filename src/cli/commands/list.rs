use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::aggregate;
use crate::db::pool::DbPool;
use crate::db::queries::{get_checkpoint, load_entries, load_summaries};
use crate::errors::AppResult;
use crate::export::logic::period_filter;
use crate::models::entry::WorkEntry;
use crate::models::summary::PeriodSummary;
use crate::utils::formatting::hours2str;
use crate::utils::table::{Table, fit_column};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        all,
        summaries,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *summaries {
            let rows = load_summaries(&mut pool)?;
            print_summaries(&rows);
            return Ok(());
        }

        let entries = load_entries(&mut pool)?;
        let checkpoint = get_checkpoint(&pool.conn)?;

        let visible: Vec<WorkEntry> = if let Some(p) = period {
            let (from, to) = period_filter(p)?;
            entries
                .into_iter()
                .filter(|e| e.date >= from && e.date <= to)
                .collect()
        } else if *all {
            entries
        } else {
            entries
                .into_iter()
                .filter(|e| e.is_current(checkpoint.as_ref()))
                .collect()
        };

        if visible.is_empty() {
            println!("No entries to show.");
            return Ok(());
        }

        print_entries(&visible);

        // Totals over what is on screen, so a filtered list adds up too
        let totals = aggregate(&visible, None);
        println!(
            "Total: {} h, {} km over {} entr{}.",
            hours2str(totals.total_hours),
            totals.total_kilometers,
            visible.len(),
            if visible.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}

fn print_entries(entries: &[WorkEntry]) {
    let mut table = Table::new(vec![
        fit_column("Date", entries.iter().map(|e| e.date_str().len())),
        fit_column("In", entries.iter().map(|e| e.start_str().len())),
        fit_column("Out", entries.iter().map(|e| e.end_str().len())),
        fit_column("Hours", entries.iter().map(|e| hours2str(e.hours).len())),
        fit_column("Location", entries.iter().map(|e| e.location.len())),
        fit_column(
            "Km",
            entries.iter().map(|e| e.kilometers.to_string().len()),
        ),
    ]);

    for e in entries {
        table.add_row(vec![
            e.date_str(),
            e.start_str(),
            e.end_str(),
            hours2str(e.hours),
            e.location.clone(),
            e.kilometers.to_string(),
        ]);
    }

    println!("{}", table.render());
}

fn print_summaries(summaries: &[PeriodSummary]) {
    if summaries.is_empty() {
        println!("No archived periods yet.");
        return;
    }

    let mut table = Table::new(vec![
        fit_column("Id", summaries.iter().map(|s| s.id.to_string().len())),
        fit_column("From", summaries.iter().map(|s| s.start_date.len())),
        fit_column("To", summaries.iter().map(|s| s.end_date.len())),
        fit_column("Closed", summaries.iter().map(|s| s.reset_date.len())),
        fit_column(
            "Hours",
            summaries.iter().map(|s| hours2str(s.total_hours).len()),
        ),
        fit_column(
            "Km",
            summaries.iter().map(|s| s.total_kilometers.to_string().len()),
        ),
    ]);

    for s in summaries {
        table.add_row(vec![
            s.id.to_string(),
            s.start_date.clone(),
            s.end_date.clone(),
            s.reset_date.clone(),
            hours2str(s.total_hours),
            s.total_kilometers.to_string(),
        ]);
    }

    println!("{}", table.render());
}
