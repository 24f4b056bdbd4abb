// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for the reservation contract suite.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: reservation-client, url
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a small typed structure for reuse across test helpers.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::DEFAULT_TARGET_KEYWORD;
pub use env::STUB_TARGET_KEYWORD;
pub use env::ServiceTarget;
pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
