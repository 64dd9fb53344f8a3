//! User service - upsert and retrieval of identity records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{UpsertUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{UserDocument, UserStore};

use super::credential_service::CredentialManager;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Insert or replace the record stored under the request's id.
    async fn upsert_user(&self, request: UpsertUser) -> AppResult<User>;

    /// Fetch a user record by id.
    async fn get_user(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService over the store port.
pub struct UserRegistry {
    store: Arc<dyn UserStore>,
    credentials: CredentialManager,
}

impl UserRegistry {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            credentials: CredentialManager::new(store.clone()),
            store,
        }
    }
}

#[async_trait]
impl UserService for UserRegistry {
    /// Upsert is a full-document replace: every field of the request is
    /// carried into the stored document, with the credential resolved
    /// first. On any resolution failure nothing is written.
    async fn upsert_user(&self, request: UpsertUser) -> AppResult<User> {
        tracing::info!(
            id = %request.id,
            display_name = %request.display_name,
            "upsert user record"
        );

        let credential = self
            .credentials
            .resolve(&request.id, &request.password)
            .await?;

        let user = User {
            id: request.id,
            description: request.description,
            display_name: request.display_name,
            active: request.active,
            sysop: request.sysop,
            credential,
            sections: request.sections,
            sections_all: request.sections_all,
            accounts: request.accounts,
            admin_accounts: request.admin_accounts,
        };

        self.store
            .put(&user.id, UserDocument::from(user.clone()))
            .await?;

        Ok(user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.store
            .get(id)
            .await?
            .map(User::from)
            .ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialUpdate, PlaintextSecret};
    use crate::errors::AppError;
    use crate::infra::{MockUserStore, StoreError};

    fn upsert_request(id: &str, password: CredentialUpdate) -> UpsertUser {
        UpsertUser {
            id: id.to_string(),
            description: String::new(),
            display_name: "Jane".to_string(),
            active: true,
            sysop: false,
            password,
            sections: Default::default(),
            sections_all: false,
            accounts: Default::default(),
            admin_accounts: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_upsert_persists_hash_not_plaintext() {
        let mut store = MockUserStore::new();
        store
            .expect_put()
            .withf(|id, doc| {
                id == "jane" && !doc.password.is_empty() && doc.password != "abcdefghij"
            })
            .returning(|_, _| Ok(()));

        let registry = UserRegistry::new(Arc::new(store));
        let request = upsert_request(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        );

        let user = registry.upsert_user(request).await.unwrap();
        assert!(user.credential.is_some());
    }

    #[tokio::test]
    async fn test_failed_resolution_writes_nothing() {
        let mut store = MockUserStore::new();
        store.expect_put().never();

        let registry = UserRegistry::new(Arc::new(store));
        let request = upsert_request(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("short")),
        );

        let result = registry.upsert_user(request).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut store = MockUserStore::new();
        store.expect_get().returning(|_| Ok(None));

        let registry = UserRegistry::new(Arc::new(store));
        let result = registry.get_user("ghost").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_get_store_failure_propagates() {
        let mut store = MockUserStore::new();
        store
            .expect_get()
            .returning(|_| Err(StoreError::Unavailable("boom".to_string())));

        let registry = UserRegistry::new(Arc::new(store));
        let result = registry.get_user("jane").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StoreUnavailable(_)
        ));
    }
}
