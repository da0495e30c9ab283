//! Formatting helpers for presenting statistics.

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// Runs per game, two decimals.
pub fn format_rpg(value: f64) -> String {
    format_number(value, 2)
}

pub fn format_year_range(min: i32, max: i32) -> String {
    format!("{min} – {max}")
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.abs().log10().floor() as i32;
    (-exponent).max(0) as usize
}
