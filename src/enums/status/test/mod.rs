//! Verification and tests for the status catalog.

use super::code::{available_variants, Status};
use crate::error::{VerifyError, VerifyResult};

/// Check the reference table invariants, then every strategy against it.
pub fn verify_all() -> VerifyResult {
    let variants = available_variants();
    let reference = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(VerifyError::MissingReference("original"))?;

    let all = Status::all();
    if all.len() != 4 {
        return Err(VerifyError::Invariant(format!(
            "expected 4 statuses, found {}",
            all.len()
        )));
    }
    for (position, status) in all.iter().enumerate() {
        if status.ordinal() != position {
            return Err(VerifyError::Invariant(format!(
                "{status} is listed at {position} but has ordinal {}",
                status.ordinal()
            )));
        }
        if Status::from_code(status.code()) != Some(*status) {
            return Err(VerifyError::Invariant(format!(
                "code {} does not map back to {status}",
                status.code()
            )));
        }
    }

    for variant in variants.iter().filter(|v| v.name != reference.name) {
        for &status in all {
            let expected = (reference.function)(status);
            let actual = (variant.function)(status);
            if actual != expected {
                return Err(VerifyError::Mismatch {
                    variant: variant.name,
                    input: status.to_string(),
                    expected: format!("{expected:?}"),
                    actual: format!("{actual:?}"),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_variants() {
        verify_all().expect("all lookup strategies should agree");
    }

    #[test]
    fn test_fixed_pairs() {
        let expected = [
            (Status::Pending, 0, ""),
            (Status::Success, 200, "Operation successful."),
            (Status::Error, 500, "Internal error."),
            (Status::NotFound, 404, "Not found."),
        ];

        for (status, code, message) in expected {
            assert_eq!(status.code(), code, "{status}: code");
            assert_eq!(status.message(), message, "{status}: message");
        }
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(
            Status::all(),
            &[
                Status::Pending,
                Status::Success,
                Status::Error,
                Status::NotFound
            ]
        );

        let mut seen = std::collections::HashSet::new();
        assert!(Status::all().iter().all(|s| seen.insert(*s)));

        // restartable: a second pass sees the same sequence
        let first: Vec<_> = Status::all().iter().collect();
        let second: Vec<_> = Status::all().iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_describe() {
        let success = Status::Success.describe();
        assert!(success.contains("200"), "{success}");
        assert!(success.contains("Operation successful."), "{success}");

        let not_found = Status::NotFound.describe();
        assert!(not_found.contains("404"), "{not_found}");
        assert!(not_found.contains("Not found."), "{not_found}");

        assert_eq!(Status::Pending.describe(), "Pending [0]");
        assert_eq!(Status::Error.describe(), "Error [500] Internal error.");
    }

    #[test]
    fn test_lookups_are_pure() {
        for &status in Status::all() {
            assert_eq!(status.describe(), status.describe());
            assert_eq!(status.code(), status.code());
            assert_eq!(status.message(), status.message());
        }
    }

    #[test]
    fn test_client_response() {
        assert_eq!(
            Status::Success.client_response(),
            "Hello Client, Operation completed successfully. Status code: 200, \
             Internal Message: Operation successful."
        );
        assert_eq!(
            Status::Pending.client_response(),
            "Hello Client, Your request is being processed. Status code: 0, \
             Internal Message: none"
        );
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Status::from_code(404), Some(Status::NotFound));
        assert_eq!(Status::from_code(0), Some(Status::Pending));
        assert_eq!(Status::from_code(418), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("success".parse::<Status>(), Ok(Status::Success));
        assert_eq!("NOT_FOUND".parse::<Status>(), Ok(Status::NotFound));
        assert_eq!("not-found".parse::<Status>(), Ok(Status::NotFound));
        assert_eq!("NotFound".parse::<Status>(), Ok(Status::NotFound));

        let err = "teapot".parse::<Status>().unwrap_err();
        assert_eq!(err.kind, "status");
        assert!(err.to_string().contains("Pending, Success, Error, NotFound"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" success".parse::<Status>(), Ok(Status::Success));
        assert_eq!("not_found \n".parse::<Status>(), Ok(Status::NotFound));
        assert!("suc cess".parse::<Status>().is_err());
    }

    fn assert_send_sync_copy<T: Send + Sync + Copy>() {}

    #[test]
    fn test_status_is_send_sync_copy() {
        assert_send_sync_copy::<Status>();
    }

    #[test]
    fn test_concurrent_lookups_match_single_thread() {
        let snapshot = || {
            Status::all()
                .iter()
                .map(|s| (s.code(), s.message(), s.describe()))
                .collect::<Vec<_>>()
        };
        let expected = snapshot();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(snapshot)).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for &status in Status::all() {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
    }
}
