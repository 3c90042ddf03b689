// Money helpers shared by the engine and any renderer.
// All monetary figures are shown with two fractional digits.

pub const MONEY_DECIMALS: i32 = 2;

// Rounds half-up (away from zero) to `decimals` places.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn round_money(value: f64) -> f64 {
    round_half_up(value, MONEY_DECIMALS)
}

pub fn format_money(value: f64) -> String {
    format!("{:.prec$}", round_money(value), prec = MONEY_DECIMALS as usize)
}
