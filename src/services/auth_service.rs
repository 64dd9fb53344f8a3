//! Authentication service - verifies a claimed secret against the stored
//! record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{AuthRequest, User};
use crate::errors::AppResult;
use crate::infra::UserStore;

/// Outcome of an authentication attempt.
///
/// Distinguishes an unknown identity from a wrong credential; whether the
/// outer layer masks that difference is its own concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// No record exists for the claimed id
    UnknownIdentity,
    /// The record exists but the supplied secret does not match
    BadCredential,
    /// The record exists and the supplied secret matches
    Authenticated,
}

impl AuthOutcome {
    /// Whether a record for the claimed id exists
    pub fn found(&self) -> bool {
        !matches!(self, AuthOutcome::UnknownIdentity)
    }

    /// Whether the supplied secret matched
    pub fn valid(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated)
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a claimed secret against the stored credential for an id.
    async fn authenticate(&self, request: AuthRequest) -> AppResult<AuthOutcome>;
}

/// Concrete implementation of AuthService over the store port.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    /// Pure read + compare; idempotent, no side effects.
    ///
    /// Neither the stored hash nor the supplied secret leaves this call.
    async fn authenticate(&self, request: AuthRequest) -> AppResult<AuthOutcome> {
        let Some(doc) = self.store.get(&request.id).await? else {
            return Ok(AuthOutcome::UnknownIdentity);
        };

        let user = User::from(doc);
        if user.verify_secret(&request.password) {
            Ok(AuthOutcome::Authenticated)
        } else {
            Ok(AuthOutcome::BadCredential)
        }
    }
}
