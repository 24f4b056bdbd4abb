// system-tests/tests/helpers/assertions.rs
// ============================================================================
// Module: Contract Assertions
// Description: Result-returning checks over service responses.
// Purpose: Fail cases with messages that name the expected outcome.
// Dependencies: reservation-client
// ============================================================================

use std::error::Error;
use std::fmt::Debug;

use reservation_client::ApiResponse;
use reservation_client::Feedback;

/// Requires the response feedback to be exactly `expected`.
pub fn require_feedback(
    response: &ApiResponse,
    expected: Feedback,
    context: &str,
) -> Result<(), Box<dyn Error>> {
    let actual = response.feedback()?;
    if actual == expected.as_str() {
        Ok(())
    } else {
        Err(format!(
            "{context}: expected feedback {:?}, got {actual:?} (status {})",
            expected.as_str(),
            response.status
        )
        .into())
    }
}

/// Requires the response status to be exactly `expected`.
pub fn require_status(
    response: &ApiResponse,
    expected: u16,
    context: &str,
) -> Result<(), Box<dyn Error>> {
    require_eq(&response.status, &expected, context)
}

/// Requires two values to be equal.
pub fn require_eq<T: PartialEq + Debug>(
    left: &T,
    right: &T,
    context: &str,
) -> Result<(), Box<dyn Error>> {
    if left == right {
        Ok(())
    } else {
        Err(format!("{context}: left={left:?} right={right:?}").into())
    }
}
