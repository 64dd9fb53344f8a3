//! User identity record and related types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::REDACTION_PLACEHOLDER;
use crate::domain::secret::{CredentialUpdate, PlaintextSecret, StoredHash};

/// User identity record.
///
/// The credential is either set (a one-way hash) or absent; plaintext is
/// unrepresentable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable unique key, immutable once created
    pub id: String,
    pub description: String,
    pub display_name: String,
    /// Account enabled
    pub active: bool,
    /// Elevated privilege, grants every scope
    pub sysop: bool,
    pub credential: Option<StoredHash>,
    /// Resource scopes the user may access
    pub sections: BTreeSet<String>,
    /// Grants access to all sections regardless of `sections`
    pub sections_all: bool,
    /// Account scopes for standard access
    pub accounts: BTreeSet<String>,
    /// Account scopes for administrative access
    pub admin_accounts: BTreeSet<String>,
}

impl User {
    /// Check access to a single section scope
    pub fn has_section(&self, section: &str) -> bool {
        self.sections_all || self.sections.contains(section)
    }

    /// Check access to a single account scope
    pub fn has_account(&self, account: &str) -> bool {
        self.accounts.contains(account)
    }

    /// Check administrative access to a single account scope
    pub fn has_admin_account(&self, account: &str) -> bool {
        self.admin_accounts.contains(account)
    }

    /// Whether this user holds every scope the check names.
    pub fn permits(&self, check: &AccessCheck) -> bool {
        if self.sysop {
            return true;
        }
        check.sections.iter().all(|s| self.has_section(s))
            && check.accounts.iter().all(|a| self.has_account(a))
    }

    /// Verify a claimed secret against the stored credential.
    ///
    /// A user without a credential set never verifies.
    pub fn verify_secret(&self, secret: &PlaintextSecret) -> bool {
        match &self.credential {
            Some(hash) => hash.verify(secret),
            None => false,
        }
    }
}

/// Inbound write request for a user record.
///
/// The `password` field carries a new plaintext secret, or signals that
/// the stored credential should be left alone (absent, empty, or the
/// redaction placeholder).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertUser {
    /// Stable unique key for the record
    #[validate(length(min = 1, message = "Id is required"))]
    #[schema(example = "sysop-jane")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub sysop: bool,
    /// New plaintext secret, or empty/placeholder to keep the stored one
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "a new secret!")]
    pub password: CredentialUpdate,
    #[serde(default)]
    pub sections: BTreeSet<String>,
    #[serde(default)]
    pub sections_all: bool,
    #[serde(default)]
    pub accounts: BTreeSet<String>,
    #[serde(default)]
    pub admin_accounts: BTreeSet<String>,
}

/// Authentication attempt payload. Transient, never persisted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "Id is required"))]
    #[schema(example = "sysop-jane")]
    pub id: String,
    /// Claimed plaintext secret
    #[schema(value_type = String)]
    pub password: PlaintextSecret,
}

/// Scope requirement evaluated against a user record by authorization
/// logic. The user must hold every named section and account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AccessCheck {
    #[serde(default)]
    pub sections: BTreeSet<String>,
    #[serde(default)]
    pub accounts: BTreeSet<String>,
}

/// User record as returned over HTTP.
///
/// The credential field always carries the fixed redaction placeholder,
/// never the stored hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub description: String,
    pub display_name: String,
    pub active: bool,
    pub sysop: bool,
    /// Always the literal redaction placeholder
    #[schema(example = "REDACTED")]
    pub password: String,
    pub sections: BTreeSet<String>,
    pub sections_all: bool,
    pub accounts: BTreeSet<String>,
    pub admin_accounts: BTreeSet<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            description: user.description,
            display_name: user.display_name,
            active: user.active,
            sysop: user.sysop,
            password: REDACTION_PLACEHOLDER.to_string(),
            sections: user.sections,
            sections_all: user.sections_all,
            accounts: user.accounts,
            admin_accounts: user.admin_accounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoped_user() -> User {
        User {
            id: "reporter".to_string(),
            description: String::new(),
            display_name: "Reporter".to_string(),
            active: true,
            sysop: false,
            credential: None,
            sections: ["news", "sports"].iter().map(|s| s.to_string()).collect(),
            sections_all: false,
            accounts: ["acme"].iter().map(|s| s.to_string()).collect(),
            admin_accounts: BTreeSet::new(),
        }
    }

    #[test]
    fn test_section_membership() {
        let user = scoped_user();
        assert!(user.has_section("news"));
        assert!(!user.has_section("finance"));
    }

    #[test]
    fn test_sections_all_grants_everything() {
        let mut user = scoped_user();
        user.sections_all = true;
        assert!(user.has_section("finance"));
    }

    #[test]
    fn test_permits_requires_every_scope() {
        let user = scoped_user();

        let mut check = AccessCheck::default();
        check.sections.insert("news".to_string());
        check.accounts.insert("acme".to_string());
        assert!(user.permits(&check));

        check.accounts.insert("globex".to_string());
        assert!(!user.permits(&check));
    }

    #[test]
    fn test_sysop_short_circuits_permits() {
        let mut user = scoped_user();
        user.sysop = true;

        let mut check = AccessCheck::default();
        check.sections.insert("finance".to_string());
        check.accounts.insert("globex".to_string());
        assert!(user.permits(&check));
    }

    #[test]
    fn test_admin_account_is_separate() {
        let mut user = scoped_user();
        user.admin_accounts.insert("acme".to_string());
        assert!(user.has_admin_account("acme"));
        assert!(!user.has_admin_account("globex"));
    }

    #[test]
    fn test_verify_without_credential_fails() {
        let user = scoped_user();
        assert!(!user.verify_secret(&PlaintextSecret::new("any secret 1")));
    }

    #[test]
    fn test_response_redacts_credential() {
        let mut user = scoped_user();
        user.credential = Some(
            StoredHash::from_secret(&PlaintextSecret::new("a real secret")).unwrap(),
        );

        let response = UserResponse::from(user);
        assert_eq!(response.password, REDACTION_PLACEHOLDER);
    }
}
