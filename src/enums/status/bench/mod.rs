//! Benchmark closures for status lookups.

use super::code::{available_variants, Status};
use crate::registry::BenchmarkClosure;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Random sequence of `size` statuses
pub fn generate_inputs(size: usize, seed: u64) -> Vec<Status> {
    let mut rng = StdRng::seed_from_u64(seed);
    let all = Status::all();
    (0..size)
        .map(|_| all[rng.random_range(0..all.len())])
        .collect()
}

pub fn closures(size: usize, seed: u64) -> Vec<BenchmarkClosure<'static>> {
    let inputs = Arc::new(generate_inputs(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let inputs = Arc::clone(&inputs);
            let lookup = v.function;

            BenchmarkClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    crate::measure!(inputs.iter().fold(0u64, |acc, &status| {
                        let (code, message) = lookup(status);
                        acc.wrapping_add(code as u64).wrapping_add(message.len() as u64)
                    }) as f64)
                }),
            }
        })
        .collect()
}
