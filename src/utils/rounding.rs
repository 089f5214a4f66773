// ABOUTME: Decimal rounding helpers for displayed nutrition and metabolic values
// ABOUTME: Rounds to a fixed number of decimal places and clamps serving multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round `value` to `decimals` places, halves to even (1317.125 -> 1317.12)
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round to one decimal place (nutrition values, serving multipliers)
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places (metabolic metrics, macro grams)
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
