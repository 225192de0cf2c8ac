//! Small account and registration rules that fail in each category.

use super::errors::{CheckedError, Failure, UncheckedError};
use crate::enums::operation::Operation;
use crate::error::ArithmeticError;

pub const MINIMUM_AGE: u32 = 18;

/// Rejects non-positive prices.
pub fn validate_price(price: f64) -> Result<(), UncheckedError> {
    if price <= 0.0 {
        return Err(UncheckedError::InvalidArgument(
            "Sorry, price cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

/// Withdraw `amount` from `balance`, returning the new balance.
pub fn withdraw(balance: f64, amount: f64) -> Result<f64, CheckedError> {
    if balance < amount {
        return Err(CheckedError::InsufficientFunds {
            requested: amount,
            balance,
        });
    }
    tracing::debug!(balance, amount, "withdrawal accepted");
    Ok(balance - amount)
}

pub fn register_user(age: i32) -> Result<(), UncheckedError> {
    if age <= 0 {
        return Err(UncheckedError::InvalidAge(age));
    }
    tracing::debug!(age, "user registered");
    Ok(())
}

/// Parse an age typed by a user and approve it if it is at least [`MINIMUM_AGE`].
///
/// Malformed or non-positive input is an [`UncheckedError`]; a valid age that is
/// too low is a [`CheckedError::UnderAge`].
pub fn approve_age(input: &str) -> Result<u32, Failure> {
    let age: i32 = input.trim().parse()?;
    if age <= 0 {
        return Err(UncheckedError::InvalidArgument(
            "The negative age cannot be real.".to_string(),
        )
        .into());
    }

    let age = age.unsigned_abs();
    if age < MINIMUM_AGE {
        return Err(CheckedError::UnderAge("Sorry, your age is less than 18.".to_string()).into());
    }
    Ok(age)
}

/// Divide and log the failure instead of propagating it.
pub fn checked_divide(a: i32, b: i32) -> Option<i32> {
    match Operation::Divide.apply(a, b) {
        Ok(value) => Some(value),
        Err(e @ ArithmeticError::DivisionByZero) => {
            tracing::warn!(a, b, error = %e, "An error occurred");
            None
        }
    }
}
