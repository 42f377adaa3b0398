use crate::error::ErrorCode;
use anchor_lang::error::Error;
use std::fmt::Debug;

/// Assert that `result` failed with the program error `expected`.
pub fn assert_error<T: Debug>(result: anchor_lang::Result<T>, expected: ErrorCode) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
