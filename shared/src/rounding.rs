//! Rounding helpers
//!
//! Chart figures round half up (ties toward positive infinity), matching how
//! the browser widgets have always displayed them. Profile figures such as
//! TDEE and calorie targets round half to even.

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place
pub fn round_half_up_1dp(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to `places` decimals, ties to even
pub fn round_ties_even_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
