//! User entity - an account holder referencing their login credential

use crate::value_objects::ResourceId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<ResourceId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Credential reference, carried by value; never fabricated by mapping
    pub credential: Option<Credential>,
}

/// Credential reference owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub is_enabled: bool,
    pub is_account_non_expired: bool,
    pub is_account_non_locked: bool,
    pub is_credentials_non_expired: bool,
}

impl User {
    /// Create a new User without identity; the store assigns one on save
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            credential,
        }
    }

    /// Get the full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Credential {
    /// Create a credential with all account flags enabled
    pub fn active(username: String, password: String) -> Self {
        Self {
            username,
            password,
            is_enabled: true,
            is_account_non_expired: true,
            is_account_non_locked: true,
            is_credentials_non_expired: true,
        }
    }

    /// Check whether the credential permits a login
    pub fn is_usable(&self) -> bool {
        self.is_enabled
            && self.is_account_non_expired
            && self.is_account_non_locked
            && self.is_credentials_non_expired
    }
}
