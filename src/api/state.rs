//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserStore;
use crate::services::{AuthService, Authenticator, UserRegistry, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User upsert/retrieval service
    pub user_service: Arc<dyn UserService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Wire the default service graph on top of a store implementation.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            user_service: Arc::new(UserRegistry::new(store.clone())),
            auth_service: Arc::new(Authenticator::new(store)),
        }
    }

    /// Create application state with manually injected services.
    pub fn with_services(
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            user_service,
            auth_service,
        }
    }
}
