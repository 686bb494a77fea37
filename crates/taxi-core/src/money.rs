//! Currency helpers.

/// Round a currency amount to whole cents (two decimal places).
///
/// Halves round away from zero, which for the non-negative amounts used by
/// fares and tips is the same as rounding half up.
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
