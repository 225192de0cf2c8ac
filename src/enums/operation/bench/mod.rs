//! Benchmark closures for operation dispatch.

use super::code::{available_variants, Operation};
use crate::registry::BenchmarkClosure;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Random `(operation, a, b)` triples. About one divisor in 64 is zero so the
/// failure path is exercised too.
pub fn generate_inputs(size: usize, seed: u64) -> Vec<(Operation, i32, i32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ops = Operation::all();

    (0..size)
        .map(|_| {
            let op = ops[rng.random_range(0..ops.len())];
            let a = rng.random_range(-1_000_000..=1_000_000);
            let b = if rng.random_ratio(1, 64) {
                0
            } else {
                rng.random_range(-1_000..=1_000)
            };
            (op, a, b)
        })
        .collect()
}

pub fn closures(size: usize, seed: u64) -> Vec<BenchmarkClosure<'static>> {
    let inputs = Arc::new(generate_inputs(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let inputs = Arc::clone(&inputs);
            let dispatch = v.function;

            BenchmarkClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    crate::measure!(inputs.iter().fold(0i64, |acc, &(op, a, b)| {
                        match dispatch(op, a, b) {
                            Ok(value) => acc.wrapping_add(value as i64),
                            Err(_) => acc.wrapping_sub(1),
                        }
                    }) as f64)
                }),
            }
        })
        .collect()
}
