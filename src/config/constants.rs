//! Application-wide constants
//!
//! Centralized location for policy values to improve maintainability.

// =============================================================================
// Credential Policy
// =============================================================================

/// Minimum secret length accepted when setting a credential
pub const MIN_SECRET_LENGTH: usize = 10;

/// Placeholder returned in place of a stored credential hash.
///
/// Inbound writes may echo it back to signal "leave the credential alone".
pub const REDACTION_PLACEHOLDER: &str = "REDACTED";

// =============================================================================
// Hashing Work Factor
// =============================================================================
//
// Fixed argon2id cost parameters. These are policy, not configuration:
// changing them changes how expensive every login and upsert is.

/// Memory cost in KiB
pub const HASH_MEMORY_KIB: u32 = 19_456;

/// Number of passes over memory
pub const HASH_PASSES: u32 = 2;

/// Degree of parallelism
pub const HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
