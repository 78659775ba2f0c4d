pub mod add;
pub mod backup;
pub mod del;
pub mod distance;
pub mod hours;
pub mod log;
pub mod period;
pub mod reset;
