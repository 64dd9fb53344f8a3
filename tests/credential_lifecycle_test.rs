//! Credential lifecycle integration tests.
//!
//! Exercises the full upsert -> retrieve -> authenticate path over the
//! in-process store, with the real hashing primitive.

use std::sync::Arc;

use async_trait::async_trait;

use identity_api::domain::{AuthRequest, CredentialUpdate, PlaintextSecret, UpsertUser};
use identity_api::errors::AppError;
use identity_api::infra::{MemoryStore, StoreError, StoreResult, UserDocument, UserStore};
use identity_api::services::{AuthOutcome, AuthService, Authenticator, UserRegistry, UserService};

fn upsert(id: &str, password: CredentialUpdate) -> UpsertUser {
    UpsertUser {
        id: id.to_string(),
        description: "test account".to_string(),
        display_name: "Test User".to_string(),
        active: true,
        sysop: false,
        password,
        sections: Default::default(),
        sections_all: false,
        accounts: Default::default(),
        admin_accounts: Default::default(),
    }
}

fn auth(id: &str, password: &str) -> AuthRequest {
    AuthRequest {
        id: id.to_string(),
        password: PlaintextSecret::new(password),
    }
}

fn services(store: Arc<dyn UserStore>) -> (UserRegistry, Authenticator) {
    (
        UserRegistry::new(store.clone()),
        Authenticator::new(store),
    )
}

#[tokio::test]
async fn test_round_trip_upsert_get_authenticate() {
    let store = Arc::new(MemoryStore::new());
    let (registry, authenticator) = services(store.clone());

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        ))
        .await
        .unwrap();

    // the stored document carries a hash, never the plaintext
    let doc = store.get("jane").await.unwrap().unwrap();
    assert!(!doc.password.is_empty());
    assert_ne!(doc.password, "abcdefghij");

    let outcome = authenticator
        .authenticate(auth("jane", "abcdefghij"))
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::Authenticated);
}

#[tokio::test]
async fn test_wrong_password_is_found_but_invalid() {
    let store = Arc::new(MemoryStore::new());
    let (registry, authenticator) = services(store);

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        ))
        .await
        .unwrap();

    let outcome = authenticator
        .authenticate(auth("jane", "wrongpass1"))
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::BadCredential);
    assert!(outcome.found());
    assert!(!outcome.valid());
}

#[tokio::test]
async fn test_unknown_id_is_a_clean_miss() {
    let store = Arc::new(MemoryStore::new());
    let (_, authenticator) = services(store);

    let outcome = authenticator
        .authenticate(auth("ghost", "whatever12"))
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::UnknownIdentity);
}

#[tokio::test]
async fn test_weak_secret_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let (registry, _) = services(store.clone());

    let result = registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("shortpw")),
        ))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    assert!(store.get("jane").await.unwrap().is_none());
}

#[tokio::test]
async fn test_redacted_update_preserves_stored_hash() {
    let store = Arc::new(MemoryStore::new());
    let (registry, authenticator) = services(store.clone());

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        ))
        .await
        .unwrap();
    let original = store.get("jane").await.unwrap().unwrap().password;

    // update display metadata without touching the credential
    let mut update = upsert("jane", CredentialUpdate::Unchanged);
    update.display_name = "Jane Renamed".to_string();
    registry.upsert_user(update).await.unwrap();

    let doc = store.get("jane").await.unwrap().unwrap();
    assert_eq!(doc.display_name, "Jane Renamed");
    assert_eq!(doc.password, original);

    // the original secret still authenticates
    let outcome = authenticator
        .authenticate(auth("jane", "abcdefghij"))
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::Authenticated);
}

#[tokio::test]
async fn test_redaction_is_idempotent_across_updates() {
    let store = Arc::new(MemoryStore::new());
    let (registry, authenticator) = services(store);

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        ))
        .await
        .unwrap();

    // echoing the placeholder back any number of times changes nothing
    for _ in 0..3 {
        let request: UpsertUser = serde_json::from_value(serde_json::json!({
            "id": "jane",
            "display_name": "Test User",
            "active": true,
            "password": "REDACTED"
        }))
        .unwrap();
        registry.upsert_user(request).await.unwrap();
    }

    let outcome = authenticator
        .authenticate(auth("jane", "abcdefghij"))
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::Authenticated);
}

#[tokio::test]
async fn test_new_user_must_supply_a_secret() {
    let store = Arc::new(MemoryStore::new());
    let (registry, _) = services(store.clone());

    // no password field at all on a first write
    let request: UpsertUser = serde_json::from_value(serde_json::json!({
        "id": "fresh"
    }))
    .unwrap();

    let result = registry.upsert_user(request).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    assert!(store.get("fresh").await.unwrap().is_none());
}

#[tokio::test]
async fn test_changing_the_secret_replaces_the_hash() {
    let store = Arc::new(MemoryStore::new());
    let (registry, authenticator) = services(store.clone());

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("abcdefghij")),
        ))
        .await
        .unwrap();
    let first = store.get("jane").await.unwrap().unwrap().password;

    registry
        .upsert_user(upsert(
            "jane",
            CredentialUpdate::Set(PlaintextSecret::new("0123456789")),
        ))
        .await
        .unwrap();
    let second = store.get("jane").await.unwrap().unwrap().password;

    assert_ne!(first, second);
    assert_eq!(
        authenticator
            .authenticate(auth("jane", "0123456789"))
            .await
            .unwrap(),
        AuthOutcome::Authenticated
    );
    assert_eq!(
        authenticator
            .authenticate(auth("jane", "abcdefghij"))
            .await
            .unwrap(),
        AuthOutcome::BadCredential
    );
}

/// Store double whose lookups always fail with a server-class error.
struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn get(&self, _id: &str) -> StoreResult<Option<UserDocument>> {
        Err(StoreError::Unavailable("500 from backend".to_string()))
    }

    async fn put(&self, _id: &str, _document: UserDocument) -> StoreResult<()> {
        Err(StoreError::Unavailable("500 from backend".to_string()))
    }
}

#[tokio::test]
async fn test_store_outage_is_an_error_not_a_miss() {
    let store = Arc::new(FailingStore);
    let (registry, authenticator) = services(store);

    let result = authenticator.authenticate(auth("jane", "abcdefghij")).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::StoreUnavailable(_)
    ));

    // a credential-preserving write fails the same way, before any put
    let result = registry
        .upsert_user(upsert("jane", CredentialUpdate::Unchanged))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::StoreUnavailable(_)
    ));
}
