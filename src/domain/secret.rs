//! Credential value objects.
//!
//! Splits the credential into two distinct types: [`PlaintextSecret`] is
//! what a caller supplies, [`StoredHash`] is what persists. The one-way
//! transformation between them lives here, so plaintext can never reach
//! the store and a hash can never be re-hashed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::Deserialize;

use crate::config::{
    HASH_MEMORY_KIB, HASH_PARALLELISM, HASH_PASSES, MIN_SECRET_LENGTH, REDACTION_PLACEHOLDER,
};
use crate::domain::error::{DomainError, DomainResult};

/// Caller-supplied secret material.
///
/// Transient: exists only for the duration of a request and is never
/// persisted or serialized back out.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct PlaintextSecret(String);

// Keep secret material out of debug output
impl std::fmt::Debug for PlaintextSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlaintextSecret").field(&"[REDACTED]").finish()
    }
}

impl PlaintextSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// One-way hash of a secret in PHC string format.
///
/// The only credential form that may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredHash(String);

impl StoredHash {
    /// Validate and hash a plaintext secret.
    ///
    /// # Errors
    /// `WeakCredential` when the secret is shorter than the policy minimum,
    /// `HashingFailure` if the hashing primitive itself fails.
    pub fn from_secret(secret: &PlaintextSecret) -> DomainResult<Self> {
        if secret.0.len() < MIN_SECRET_LENGTH {
            return Err(DomainError::WeakCredential);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = hasher()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| DomainError::HashingFailure(e.to_string()))?;

        Ok(Self(hash.to_string()))
    }

    /// Wrap a hash string retrieved from the store.
    pub fn from_string(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Verify a plaintext secret against this hash.
    ///
    /// The comparison inside the verifier is constant-time. A hash that
    /// does not parse as a PHC string never verifies.
    pub fn verify(&self, secret: &PlaintextSecret) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        hasher().verify_password(secret.as_bytes(), &parsed).is_ok()
    }
}

/// Credential field of an inbound write.
///
/// Explicit signal replacing the magic-string convention: `Unchanged`
/// keeps whatever hash is already stored, `Set` replaces it.
#[derive(Debug, Clone)]
pub enum CredentialUpdate {
    /// Keep the stored credential as-is
    Unchanged,
    /// Replace the stored credential with a hash of this secret
    Set(PlaintextSecret),
}

impl CredentialUpdate {
    /// Map the wire value of the `password` field.
    ///
    /// An absent or empty value and the redaction placeholder (as echoed
    /// back from a prior read) all mean "leave the credential alone".
    pub fn from_wire(raw: Option<String>) -> Self {
        match raw {
            None => CredentialUpdate::Unchanged,
            Some(s) if s.is_empty() || s == REDACTION_PLACEHOLDER => CredentialUpdate::Unchanged,
            Some(s) => CredentialUpdate::Set(PlaintextSecret::new(s)),
        }
    }
}

impl Default for CredentialUpdate {
    fn default() -> Self {
        CredentialUpdate::Unchanged
    }
}

impl<'de> Deserialize<'de> for CredentialUpdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(CredentialUpdate::from_wire)
    }
}

/// Argon2id instance under the fixed work-factor policy.
fn hasher() -> Argon2<'static> {
    let params =
        Params::new(HASH_MEMORY_KIB, HASH_PASSES, HASH_PARALLELISM, None).unwrap_or_default();
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}
