// crates/reservation-client/src/feedback.rs
// ============================================================================
// Module: Service Feedback
// Description: Closed enumeration of feedback strings returned by the service.
// Purpose: Give the contract oracle stable, typed identities.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The reservation service reports every outcome as a human-readable
//! `feedback` string inside a 200 JSON body. [`Feedback`] pins the exact
//! strings the contract depends on.
//! Invariants:
//! - [`Feedback::as_str`] returns the exact wire string.
//! - [`Feedback::parse`] is an exact match; anything else is unknown.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

// ============================================================================
// SECTION: Feedback
// ============================================================================

/// Feedback outcomes reported by the reservation service.
///
/// # Invariants
/// - Variants are stable for contract assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Reservation accepted.
    ReservationSuccess,
    /// Registration accepted.
    RegistrationSuccess,
    /// A required reservation field was empty or absent.
    MissingAttribute,
    /// The citizen already holds a reservation.
    AlreadyReserved,
    /// The citizen ID is not 13 numeric digits.
    InvalidCitizenId,
    /// The citizen ID has no registration.
    NotRegistered,
    /// The vaccine name is not one the service offers.
    InvalidVaccineName,
}

impl Feedback {
    /// Every feedback variant, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::ReservationSuccess,
        Self::RegistrationSuccess,
        Self::MissingAttribute,
        Self::AlreadyReserved,
        Self::InvalidCitizenId,
        Self::NotRegistered,
        Self::InvalidVaccineName,
    ];

    /// Returns the exact feedback string sent by the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReservationSuccess => "reservation success!",
            Self::RegistrationSuccess => "registration success!",
            Self::MissingAttribute => "reservation failed: missing some attribute",
            Self::AlreadyReserved => {
                "reservation failed: there is already a reservation for this citizen"
            }
            Self::InvalidCitizenId => "reservation failed: invalid citizen ID",
            Self::NotRegistered => "reservation failed: citizen ID is not registered",
            // The service says "report" here, not "reservation".
            Self::InvalidVaccineName => "report failed: invalid vaccine name",
        }
    }

    /// Maps a feedback string onto its variant.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feedback| feedback.as_str() == raw)
    }

    /// Returns true for the two success outcomes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::ReservationSuccess | Self::RegistrationSuccess)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
