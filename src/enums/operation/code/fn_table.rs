//! Dispatch through a constant array of function pointers.
//!
//! The discriminant of `Operation` is the row index, so lookup is a single
//! indexed load followed by an indirect call.

use super::{BinaryFn, Operation};
use crate::error::ArithmeticError;

fn add(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    Ok(a.wrapping_add(b))
}

fn subtract(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    Ok(a.wrapping_sub(b))
}

fn multiply(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    Ok(a.wrapping_mul(b))
}

fn divide(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

// Indexed by `Operation as usize`.
const TABLE: [BinaryFn; 4] = [add, subtract, multiply, divide];

#[inline(never)]
pub fn apply_fn_table(op: Operation, a: i32, b: i32) -> Result<i32, ArithmeticError> {
    TABLE[op as usize](a, b)
}
