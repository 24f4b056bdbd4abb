// crates/reservation-client/src/transcript.rs
// ============================================================================
// Module: Call Transcript
// Description: Ordered capture of requests and responses issued by a client.
// Purpose: Persist what was sent and received for failed contract runs.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`Transcript`] is the ordered record of every exchange a
//! [`crate::ReservationClient`] attempts, including calls that never got a
//! response. Test reporters persist it next to each run summary.
//! Invariants:
//! - Sequence numbers start at 1 and follow call order.
//! - Clones of a client append to the same transcript.

use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

/// One request/response exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// HTTP method.
    pub method: String,
    /// Endpoint path relative to the base URL.
    pub path: String,
    /// Form fields sent, as a JSON object.
    pub request: Value,
    /// HTTP status when a response arrived.
    pub status: Option<u16>,
    /// Decoded JSON body, or null.
    pub response: Value,
    /// Transport or decode error, when the call failed.
    pub error: Option<String>,
}

/// Shared, append-only transcript.
///
/// # Invariants
/// - Clones share the same underlying entries.
/// - A poisoned lock drops writes and reads as empty.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Recorded entries in call order.
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl Transcript {
    /// Appends an exchange, assigning the next sequence number.
    pub fn record(
        &self,
        method: &str,
        path: &str,
        request: Value,
        status: Option<u16>,
        response: Value,
        error: Option<String>,
    ) {
        let Ok(mut guard) = self.entries.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path: path.to_string(),
            request,
            status,
            response,
            error,
        });
    }

    /// Returns a snapshot of the entries.
    #[must_use]
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}
