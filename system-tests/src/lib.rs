// system-tests/src/lib.rs
// ============================================================================
// Module: Reservation Contract System Tests Library
// Description: Shared configuration for the reservation contract suite.
// Purpose: Provide typed environment settings to the system-test binaries.
// Dependencies: reservation-client
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the reservation contract
//! system tests in `system-tests/tests`. The suite targets a live service when
//! a base URL is configured and an in-process stub otherwise.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
