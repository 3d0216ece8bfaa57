//! Rounding and floor primitives for serial numbers.
//!
//! Serial numbers are signed (dates before the epoch are negative), so every
//! division in this crate must be Euclidean: the remainder stays in
//! `[0, d)` for a positive divisor regardless of the sign of the dividend.
//! `i64::div_euclid` and `i64::rem_euclid` carry exactly that contract and
//! are used directly wherever serials, months or seconds are normalized.
//! This module adds the two float primitives the conversions need.

/// Returns the largest integer less than or equal to `v`.
///
/// Distinct from truncation for negative values: `floor_to_int(-0.5)` is
/// -1, not 0.
pub fn floor_to_int(v: f64) -> i64 {
    v.floor() as i64
}

/// Rounds to the nearest integer; exact halves go to the nearest even
/// integer (banker's rounding), matching IEEE-754 round-to-even.
pub fn round_half_even(v: f64) -> i64 {
    v.round_ties_even() as i64
}
