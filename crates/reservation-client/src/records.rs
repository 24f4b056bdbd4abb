// crates/reservation-client/src/records.rs
// ============================================================================
// Module: Request Records
// Description: Registration and reservation payloads with fixture builders.
// Purpose: Let tests override only the fields under test.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Records are transient request payloads serialized as form bodies. Each has
//! a builder seeded with fixture defaults so a test names only the fields it
//! is probing.
//! Invariants:
//! - No local validation; malformed values are sent verbatim.
//! - Field names match the service's form keys.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Fixture Defaults
// ============================================================================

/// Default citizen ID shared by registration and reservation fixtures.
pub const DEFAULT_CITIZEN_ID: &str = "1103900076232";
/// Default first name for registration fixtures.
pub const DEFAULT_NAME: &str = "Panitan";
/// Default surname for registration fixtures.
pub const DEFAULT_SURNAME: &str = "Plengkham";
/// Default birth date for registration fixtures.
pub const DEFAULT_BIRTH_DATE: &str = "09 Feb 2001";
/// Default occupation for registration fixtures.
pub const DEFAULT_OCCUPATION: &str = "Student";
/// Default address for registration fixtures.
pub const DEFAULT_ADDRESS: &str = "357/3 Namuang rd. 25000";
/// Default vaccination site for reservation fixtures.
pub const DEFAULT_SITE_NAME: &str = "Chakkrapan";
/// Default vaccine for reservation fixtures.
pub const DEFAULT_VACCINE_NAME: &str = "Astra";

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Citizen registration payload for `POST /registration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// Citizen identity number, expected to be 13 digits.
    pub citizen_id: String,
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Birth date as free text (for example `09 Feb 2001`).
    pub birth_date: String,
    /// Occupation.
    pub occupation: String,
    /// Postal address.
    pub address: String,
}

impl RegistrationRecord {
    /// Starts a builder seeded with the fixture defaults.
    #[must_use]
    pub fn builder() -> RegistrationRecordBuilder {
        RegistrationRecordBuilder {
            record: Self::default(),
        }
    }
}

impl Default for RegistrationRecord {
    fn default() -> Self {
        Self {
            citizen_id: DEFAULT_CITIZEN_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            surname: DEFAULT_SURNAME.to_string(),
            birth_date: DEFAULT_BIRTH_DATE.to_string(),
            occupation: DEFAULT_OCCUPATION.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

/// Builder for [`RegistrationRecord`].
#[derive(Debug, Clone)]
#[must_use]
pub struct RegistrationRecordBuilder {
    /// Record under construction.
    record: RegistrationRecord,
}

impl RegistrationRecordBuilder {
    /// Overrides the citizen ID.
    pub fn citizen_id(mut self, value: impl Into<String>) -> Self {
        self.record.citizen_id = value.into();
        self
    }

    /// Overrides the first name.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.record.name = value.into();
        self
    }

    /// Overrides the surname.
    pub fn surname(mut self, value: impl Into<String>) -> Self {
        self.record.surname = value.into();
        self
    }

    /// Overrides the birth date.
    pub fn birth_date(mut self, value: impl Into<String>) -> Self {
        self.record.birth_date = value.into();
        self
    }

    /// Overrides the occupation.
    pub fn occupation(mut self, value: impl Into<String>) -> Self {
        self.record.occupation = value.into();
        self
    }

    /// Overrides the address.
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.record.address = value.into();
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> RegistrationRecord {
        self.record
    }
}

// ============================================================================
// SECTION: Reservation
// ============================================================================

/// Vaccine reservation payload for `POST /reservation` and `DELETE /citizen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Citizen identity number.
    pub citizen_id: String,
    /// Vaccination site name.
    pub site_name: String,
    /// Vaccine name; the service accepts a fixed set.
    pub vaccine_name: String,
}

impl ReservationRecord {
    /// Starts a builder seeded with the fixture defaults.
    #[must_use]
    pub fn builder() -> ReservationRecordBuilder {
        ReservationRecordBuilder {
            record: Self::default(),
        }
    }
}

impl Default for ReservationRecord {
    fn default() -> Self {
        Self {
            citizen_id: DEFAULT_CITIZEN_ID.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            vaccine_name: DEFAULT_VACCINE_NAME.to_string(),
        }
    }
}

/// Builder for [`ReservationRecord`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ReservationRecordBuilder {
    /// Record under construction.
    record: ReservationRecord,
}

impl ReservationRecordBuilder {
    /// Overrides the citizen ID.
    pub fn citizen_id(mut self, value: impl Into<String>) -> Self {
        self.record.citizen_id = value.into();
        self
    }

    /// Overrides the site name.
    pub fn site_name(mut self, value: impl Into<String>) -> Self {
        self.record.site_name = value.into();
        self
    }

    /// Overrides the vaccine name.
    pub fn vaccine_name(mut self, value: impl Into<String>) -> Self {
        self.record.vaccine_name = value.into();
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> ReservationRecord {
        self.record
    }
}
