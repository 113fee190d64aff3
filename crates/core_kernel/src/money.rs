//! Amount helpers with precise decimal arithmetic
//!
//! Claim amounts and sums insured are plain `Decimal` values in a single
//! office currency. This module holds the arithmetic shared by the reports
//! (means, ratios, rounding) and the display formatting used by the
//! dashboard tables.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Symbol prefixed to formatted amounts
pub const CURRENCY_SYMBOL: &str = "$";

/// Decimal places used for reported and displayed amounts
pub const REPORT_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during amount calculations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Rounds an amount to two decimal places using banker's rounding
/// (round half to even)
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(REPORT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Arithmetic mean of `count` values summing to `total`; zero for no values
pub fn mean(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total / Decimal::from(count)
}

/// Divides `numerator` by `denominator`
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Result<Decimal, MoneyError> {
    if denominator.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| MoneyError::InvalidAmount(format!("{} / {}", numerator, denominator)))
}

/// Formats an amount for display, e.g. `$1,234.56`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_amount(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(whole), fraction)
}

/// Formats a ratio as a percentage with two decimals, e.g. `0.9` -> `90.00%`
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_amount(value * dec!(100)))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
