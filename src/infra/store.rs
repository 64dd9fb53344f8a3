//! User Store port and persisted document shape.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{StoredHash, User};

#[cfg(test)]
use mockall::automock;

/// Failure classes the store can report.
///
/// A missing document is not a failure; `get` reports it as `Ok(None)`.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Server-class response or transport failure; safe for the caller to retry
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Port to the external document store.
///
/// Documents are keyed by user id and replaced whole on every write; the
/// store guarantees per-document atomicity and nothing more.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the document stored under `id`.
    ///
    /// `Ok(None)` means the store answered definitively that no such
    /// document exists.
    async fn get(&self, id: &str) -> StoreResult<Option<UserDocument>>;

    /// Replace the document stored under `id` in a single atomic write.
    async fn put(&self, id: &str, document: UserDocument) -> StoreResult<()>;
}

/// Persisted document shape. Field names are the store's wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub sysop: bool,
    /// Credential hash in PHC format; empty when none has been set
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub sections: BTreeSet<String>,
    #[serde(default)]
    pub sections_all: bool,
    #[serde(default)]
    pub accounts: BTreeSet<String>,
    #[serde(default)]
    pub admin_accounts: BTreeSet<String>,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        let credential = if doc.password.is_empty() {
            None
        } else {
            Some(StoredHash::from_string(doc.password))
        };

        Self {
            id: doc.id,
            description: doc.description,
            display_name: doc.display_name,
            active: doc.active,
            sysop: doc.sysop,
            credential,
            sections: doc.sections,
            sections_all: doc.sections_all,
            accounts: doc.accounts,
            admin_accounts: doc.admin_accounts,
        }
    }
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            description: user.description,
            display_name: user.display_name,
            active: user.active,
            sysop: user.sysop,
            password: user
                .credential
                .map(StoredHash::into_string)
                .unwrap_or_default(),
            sections: user.sections,
            sections_all: user.sections_all,
            accounts: user.accounts,
            admin_accounts: user.admin_accounts,
        }
    }
}
