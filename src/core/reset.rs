use crate::core::period::close_period;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{commit_reset, get_checkpoint, load_entries};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::{DateTime, Local};

/// High-level business logic for the `reset` command.
///
/// Confirmation is the caller's job; this logic assumes intent has already
/// been confirmed and must not prompt.
pub struct ResetLogic;

impl ResetLogic {
    pub fn apply(pool: &mut DbPool, now: DateTime<Local>) -> AppResult<()> {
        let entries = load_entries(pool)?;
        let checkpoint = get_checkpoint(&pool.conn)?;

        let closed = close_period(&entries, checkpoint.as_ref(), now);

        // Summary insert and checkpoint advance commit together: a failure
        // here leaves the old checkpoint in place and the hours still
        // reportable on the next attempt.
        let summary_id = commit_reset(
            &mut pool.conn,
            closed.summary.as_ref(),
            &closed.new_checkpoint,
        )?;

        match (&closed.summary, summary_id) {
            (Some(s), Some(id)) => {
                ttlog(
                    &pool.conn,
                    "reset",
                    &format!("summary:{id}"),
                    &format!(
                        "Closed period {} to {}: {:.2} h, {} km",
                        s.start_date, s.end_date, s.total_hours, s.total_kilometers
                    ),
                )?;
                success(format!(
                    "Period closed: {} to {} ({:.2} h, {} km archived as summary #{}).",
                    s.start_date, s.end_date, s.total_hours, s.total_kilometers, id
                ));
            }
            _ => {
                ttlog(
                    &pool.conn,
                    "reset",
                    "",
                    "Reset with no hours to report; checkpoint advanced",
                )?;
                info("No hours in the current period; checkpoint advanced without a summary.");
            }
        }

        Ok(())
    }
}
