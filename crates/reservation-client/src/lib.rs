// crates/reservation-client/src/lib.rs
// ============================================================================
// Module: Reservation Client Library
// Description: Typed blocking client for the vaccine reservation HTTP API.
// Purpose: Build request records, issue calls, and decode feedback outcomes.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Reservation Client wraps the three endpoints of the vaccine reservation
//! service (`/citizen`, `/registration`, `/reservation`) behind
//! [`ReservationClient`]. Request payloads are built from
//! [`RegistrationRecord`] and [`ReservationRecord`] builders with fixture
//! defaults, and every response is decoded into an [`ApiResponse`] whose
//! `feedback` field maps onto the closed [`Feedback`] enumeration.
//! Invariants:
//! - Validation happens server-side; records are sent exactly as built.
//! - Every call is captured in the client [`Transcript`].
//! - Response bodies are capped at [`MAX_RESPONSE_BYTES`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod feedback;
pub mod records;
pub mod transcript;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ApiResponse;
pub use client::ClientError;
pub use client::DEFAULT_BASE_URL;
pub use client::MAX_RESPONSE_BYTES;
pub use client::ReservationClient;
pub use feedback::Feedback;
pub use records::RegistrationRecord;
pub use records::RegistrationRecordBuilder;
pub use records::ReservationRecord;
pub use records::ReservationRecordBuilder;
pub use transcript::Transcript;
pub use transcript::TranscriptEntry;
