// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the reservation contract system-tests.
// Purpose: Provide the harness, fixture guard, service stub, and artifacts.
// Dependencies: system-tests, reservation-client
// ============================================================================

//! ## Overview
//! Shared helpers for the reservation contract system-tests.
//! Invariants:
//! - Each case starts from a reset fixture citizen.
//! - Cases run one at a time against shared remote state.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod assertions;
pub mod fixture;
