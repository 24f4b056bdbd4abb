// system-tests/tests/helpers/fixture.rs
// ============================================================================
// Module: Citizen Fixture
// Description: Scoped reset of the fixture citizen around a test case.
// Purpose: Keep the shared remote database clean regardless of test outcome.
// Dependencies: reservation-client
// ============================================================================

use reservation_client::ClientError;
use reservation_client::ReservationClient;
use reservation_client::ReservationRecord;

/// Guard that deletes the fixture citizen on creation and again on release or drop.
///
/// # Invariants
/// - The setup reset tolerates any HTTP status, including not found.
/// - Drop-time failures are ignored.
pub struct CitizenFixture {
    client: ReservationClient,
    record: ReservationRecord,
    released: bool,
}

impl CitizenFixture {
    /// Resets the default fixture citizen.
    pub fn reset(client: &ReservationClient) -> Result<Self, ClientError> {
        Self::reset_record(client, ReservationRecord::default())
    }

    /// Resets the citizen named by `record`.
    pub fn reset_record(
        client: &ReservationClient,
        record: ReservationRecord,
    ) -> Result<Self, ClientError> {
        client.reset_citizen(&record)?;
        Ok(Self {
            client: client.clone(),
            record,
            released: false,
        })
    }

    /// Runs the teardown reset now and reports its outcome.
    pub fn release(mut self) -> Result<u16, ClientError> {
        self.released = true;
        self.client.reset_citizen(&self.record)
    }
}

impl Drop for CitizenFixture {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let _ = self.client.reset_citizen(&self.record);
    }
}
