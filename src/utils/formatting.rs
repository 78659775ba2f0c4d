//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Round a decimal hour count to 2 fractional digits, standard rounding.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Render hours with exactly 2 decimals, e.g. "7.75".
pub fn hours2str(h: f64) -> String {
    format!("{:.2}", h)
}

/// Render kilometers with the unit suffix.
pub fn km2str(km: i64) -> String {
    format!("{} km", km)
}
