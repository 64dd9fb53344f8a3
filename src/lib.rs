//! identity-api - User identity records over a document store.
//!
//! Manages user identity records (credentials, flags, access scopes) and
//! exposes upsert, retrieve, and authenticate operations. The credential
//! lifecycle is the core: a password is validated and hashed on write,
//! carried forward unchanged on partial updates, and verified on login.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and policy constants
//! - **domain**: Core business entities and credential value objects
//! - **services**: Credential manager, authenticator, user registry
//! - **infra**: The user-store port and its in-process implementation
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AuthRequest, UpsertUser, User};
pub use errors::{AppError, AppResult};
