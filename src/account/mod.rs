//! Account gate
//!
//! A process-lifetime username/password map with two operations: create an
//! account and log in. Credentials are compared in plaintext and nothing is
//! persisted; this is a toy gate, not a security component. The store is an
//! explicit owned object handed to whatever needs it rather than ambient
//! global state.

use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by the account gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Username or password was empty
    #[error("Username and password must not be empty")]
    EmptyField,

    /// The username already has an account
    #[error("Username is already taken: {0}")]
    UsernameTaken(String),

    /// Username unknown or password mismatch
    ///
    /// The two cases are deliberately indistinguishable to the caller.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// In-memory account store with process lifetime
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, String>,
}

impl AccountStore {
    /// Create an empty account store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account
    ///
    /// Rejects empty fields and usernames that already exist; otherwise
    /// inserts the plaintext credential pair.
    pub fn create_account(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyField);
        }

        if self.accounts.contains_key(username) {
            warn!(username, "account creation rejected: username taken");
            return Err(AccountError::UsernameTaken(username.to_string()));
        }

        self.accounts.insert(username.to_string(), password.to_string());
        debug!(username, "account created");
        Ok(())
    }

    /// Log in with a credential pair
    ///
    /// Succeeds iff the username exists and the stored value equals the
    /// given password. No hashing, no lockout, no rate limiting.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AccountError> {
        match self.accounts.get(username.trim()) {
            Some(stored) if stored == password => {
                debug!(username, "login succeeded");
                Ok(())
            }
            _ => {
                warn!(username, "login failed");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Check whether a username is registered
    pub fn has_account(&self, username: &str) -> bool {
        self.accounts.contains_key(username.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account() {
        let mut store = AccountStore::new();
        assert_eq!(store.account_count(), 0);

        store.create_account("alice", "pw1").unwrap();
        assert_eq!(store.account_count(), 1);
        assert!(store.has_account("alice"));
        assert!(!store.has_account("bob"));
    }

    #[test]
    fn test_create_account_rejects_empty_fields() {
        let mut store = AccountStore::new();

        assert_eq!(store.create_account("", "pw"), Err(AccountError::EmptyField));
        assert_eq!(store.create_account("alice", ""), Err(AccountError::EmptyField));
        assert_eq!(store.create_account("   ", "pw"), Err(AccountError::EmptyField));
        assert_eq!(store.account_count(), 0);
    }

    #[test]
    fn test_create_account_rejects_duplicate_username() {
        let mut store = AccountStore::new();
        store.create_account("alice", "pw1").unwrap();

        let result = store.create_account("alice", "pw2");
        assert_eq!(result, Err(AccountError::UsernameTaken("alice".to_string())));

        // Original password untouched
        assert!(store.login("alice", "pw1").is_ok());
    }

    #[test]
    fn test_login() {
        let mut store = AccountStore::new();
        store.create_account("alice", "pw1").unwrap();

        assert_eq!(store.login("alice", "wrong"), Err(AccountError::InvalidCredentials));
        assert!(store.login("alice", "pw1").is_ok());
    }

    #[test]
    fn test_login_unknown_user_matches_wrong_password() {
        let mut store = AccountStore::new();
        store.create_account("alice", "pw1").unwrap();

        // Unknown user and wrong password yield the same error
        assert_eq!(store.login("bob", "pw1"), Err(AccountError::InvalidCredentials));
        assert_eq!(store.login("alice", "pw2"), Err(AccountError::InvalidCredentials));
    }
}
