//! Credential manager - decides what credential a write persists.

use std::sync::Arc;

use crate::domain::{CredentialUpdate, DomainError, DomainResult, StoredHash, User};
use crate::infra::UserStore;

/// Resolves the credential field of an inbound write.
///
/// Holds no state of its own; prior state is read through the store port.
pub struct CredentialManager {
    store: Arc<dyn UserStore>,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Decide which credential hash the write under `id` should persist.
    ///
    /// A new secret is validated and hashed. A write that carries no secret
    /// keeps whatever is already stored under `id`, because the subsequent
    /// upsert replaces the whole document; without this read the stored
    /// hash would be erased. A first write must supply a real secret.
    ///
    /// Does not persist anything itself. Between this read and the caller's
    /// put, a concurrent credential change can be overwritten; the store's
    /// last write wins.
    ///
    /// # Errors
    /// `WeakCredential` on a too-short secret or a first write without one,
    /// `StoreUnavailable` when the preservation read fails,
    /// `HashingFailure` if the hashing primitive fails.
    pub async fn resolve(
        &self,
        id: &str,
        update: &CredentialUpdate,
    ) -> DomainResult<Option<StoredHash>> {
        match update {
            CredentialUpdate::Set(secret) => StoredHash::from_secret(secret).map(Some),
            CredentialUpdate::Unchanged => {
                let existing = self
                    .store
                    .get(id)
                    .await
                    .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

                match existing {
                    // carry the stored credential forward unchanged
                    Some(doc) => Ok(User::from(doc).credential),
                    // no prior record: a first write must set a real secret
                    None => Err(DomainError::WeakCredential),
                }
            }
        }
    }
}
