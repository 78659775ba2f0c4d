pub mod entry;
pub mod summary;
pub mod totals;
