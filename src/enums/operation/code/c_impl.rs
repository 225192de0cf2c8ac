//! FFI bindings for the C implementation.

#[cfg(c_implementation_active)]
use super::Operation;
#[cfg(c_implementation_active)]
use crate::error::ArithmeticError;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::c_int;

    extern "C" {
        pub fn operation_apply_c_switch(op: c_int, a: i32, b: i32, out: *mut i32) -> c_int;
    }
}

/// C `switch` statement dispatch
#[cfg(c_implementation_active)]
pub fn apply_c_switch(op: Operation, a: i32, b: i32) -> Result<i32, ArithmeticError> {
    let mut out: i32 = 0;
    // SAFETY: `out` is a valid, exclusively borrowed i32 for the duration of the call.
    let status = unsafe { ffi::operation_apply_c_switch(op as libc::c_int, a, b, &mut out) };
    match status {
        0 => Ok(out),
        _ => Err(ArithmeticError::DivisionByZero),
    }
}

/// Whether the build script compiled the C sources
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);
