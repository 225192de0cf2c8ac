//! Verification and tests for the operation dispatcher.

use super::code::{apply_original, available_variants, Operation};
use crate::error::{ArithmeticError, VerifyError, VerifyResult};

/// Operand pairs covering signs, zero divisors and the overflow boundaries.
const TEST_CASES: &[(i32, i32)] = &[
    (5, 3),
    (5, 0),
    (0, 5),
    (0, 0),
    (-7, 2),
    (7, -2),
    (-7, -2),
    (1, 1),
    (100, 7),
    (i32::MAX, 1),
    (i32::MIN, 1),
    (i32::MIN, -1),
    (i32::MAX, i32::MAX),
    (i32::MIN, 0),
];

/// Verify the reference against the documented scenarios, then every
/// variant against the reference.
pub fn verify_all() -> VerifyResult {
    let scenarios = [
        (Operation::Add, 8),
        (Operation::Subtract, 2),
        (Operation::Multiply, 15),
        (Operation::Divide, 1),
    ];
    for (op, expected) in scenarios {
        if apply_original(op, 5, 3) != Ok(expected) {
            return Err(VerifyError::Invariant(format!("{op}(5, 3) should be {expected}")));
        }
    }
    if apply_original(Operation::Divide, 5, 0) != Err(ArithmeticError::DivisionByZero) {
        return Err(VerifyError::Invariant(
            "Divide(5, 0) should fail with division by zero".to_string(),
        ));
    }

    let variants = available_variants();
    let reference = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(VerifyError::MissingReference("original"))?;

    for variant in variants.iter().filter(|v| v.name != reference.name) {
        for &op in Operation::all() {
            for &(a, b) in TEST_CASES {
                let expected = (reference.function)(op, a, b);
                let actual = (variant.function)(op, a, b);

                if actual != expected {
                    return Err(VerifyError::Mismatch {
                        variant: variant.name,
                        input: format!("{op}({a}, {b})"),
                        expected: format!("{expected:?}"),
                        actual: format!("{actual:?}"),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::operation::code::Calculator;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("all dispatch strategies should agree");
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(Operation::Add.apply(5, 3), Ok(8));
        assert_eq!(Operation::Subtract.apply(5, 3), Ok(2));
        assert_eq!(Operation::Multiply.apply(5, 3), Ok(15));
        assert_eq!(Operation::Divide.apply(5, 3), Ok(1));
        assert_eq!(
            Operation::Divide.apply(5, 0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(
            Operation::all(),
            &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide
            ]
        );
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(Operation::Divide.apply(-7, 2), Ok(-3));
        assert_eq!(Operation::Divide.apply(7, -2), Ok(-3));
        assert_eq!(Operation::Divide.apply(-7, -2), Ok(3));
        assert_eq!(Operation::Divide.apply(i32::MIN, -1), Ok(i32::MIN));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(Operation::Add.apply(i32::MAX, 1), Ok(i32::MIN));
        assert_eq!(Operation::Subtract.apply(i32::MIN, 1), Ok(i32::MAX));
        assert_eq!(Operation::Multiply.apply(i32::MAX, 2), Ok(-2));
    }

    #[test]
    fn test_calculator_trait_matches_inherent_apply() {
        let calculators: Vec<&dyn Calculator> = Operation::all()
            .iter()
            .map(|op| op as &dyn Calculator)
            .collect();
        for (calc, &op) in calculators.iter().zip(Operation::all()) {
            assert_eq!(calc.apply(12, 4), op.apply(12, 4));
        }
    }

    #[test]
    fn test_every_variant_rejects_zero_divisor() {
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(Operation::Divide, 42, 0),
                Err(ArithmeticError::DivisionByZero),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_c_switch_registered_only_when_compiled() {
        let names: Vec<_> = available_variants().iter().map(|v| v.name).collect();
        assert_eq!(names[..2], ["original", "fn-table"]);
        assert_eq!(
            names.contains(&"c-switch"),
            crate::enums::operation::C_IMPL_AVAILABLE
        );
    }

    fn assert_send_sync_copy<T: Send + Sync + Copy>() {}

    #[test]
    fn test_operation_is_send_sync_copy() {
        assert_send_sync_copy::<Operation>();
        assert_send_sync_copy::<ArithmeticError>();
    }

    fn apply_every_case() -> Vec<Result<i32, ArithmeticError>> {
        Operation::all()
            .iter()
            .flat_map(|&op| TEST_CASES.iter().map(move |&(a, b)| op.apply(a, b)))
            .collect()
    }

    #[test]
    fn test_concurrent_apply_matches_single_thread() {
        let expected = apply_every_case();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(apply_every_case)).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_parse() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("MULTIPLY".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(" - ".parse::<Operation>(), Ok(Operation::Subtract));
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "division by zero"
        );
    }

    proptest! {
        #[test]
        fn prop_matches_integer_arithmetic(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0)) {
            prop_assert_eq!(Operation::Add.apply(a, b), Ok(a.wrapping_add(b)));
            prop_assert_eq!(Operation::Subtract.apply(a, b), Ok(a.wrapping_sub(b)));
            prop_assert_eq!(Operation::Multiply.apply(a, b), Ok(a.wrapping_mul(b)));
            prop_assert_eq!(Operation::Divide.apply(a, b), Ok(a.wrapping_div(b)));
        }

        #[test]
        fn prop_small_operands_are_exact(a in -10_000i32..10_000, b in -10_000i32..10_000) {
            prop_assume!(b != 0);
            prop_assert_eq!(Operation::Add.apply(a, b), Ok(a + b));
            prop_assert_eq!(Operation::Subtract.apply(a, b), Ok(a - b));
            prop_assert_eq!(Operation::Multiply.apply(a, b), Ok(a * b));
            prop_assert_eq!(Operation::Divide.apply(a, b), Ok((a as f64 / b as f64).trunc() as i32));
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in any::<i32>()) {
            prop_assert_eq!(Operation::Divide.apply(a, 0), Err(ArithmeticError::DivisionByZero));
        }

        #[test]
        fn prop_apply_is_pure(a in any::<i32>(), b in any::<i32>()) {
            for &op in Operation::all() {
                prop_assert_eq!(op.apply(a, b), op.apply(a, b));
            }
        }

        #[test]
        fn prop_variants_agree(a in any::<i32>(), b in any::<i32>()) {
            for variant in available_variants() {
                for &op in Operation::all() {
                    prop_assert_eq!((variant.function)(op, a, b), apply_original(op, a, b));
                }
            }
        }
    }
}
