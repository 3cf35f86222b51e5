//! Local login gate backed by `users.json`.
//!
//! The credential file is a flat JSON object mapping usernames to the
//! lowercase hex SHA-256 digest of their password:
//!
//! ```json
//! {"alice": "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"}
//! ```
//!
//! The digest is unsalted and single-pass. This keeps a casual user out of
//! a shared desktop session and nothing more: it is not suitable for any
//! real authentication.
//!
//! A successful [`CredentialStore::authenticate`] returns a [`Session`],
//! which is the only proof of login the rest of the crate accepts. Sessions
//! live in memory for the lifetime of the process.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Username and password must not be empty")]
    EmptyCredentials,
    #[error("No users yet. Register first.")]
    NoUsers,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    pub(crate) fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// SHA-256 of the password's UTF-8 bytes, as lowercase hex.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Username → password digest, read from and written back to one JSON file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl CredentialStore {
    /// Load the store. A missing or malformed file yields an empty store.
    pub fn load(path: &Path) -> Self {
        let users = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            users,
        }
    }

    /// Add or replace a user and rewrite the whole file.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        self.users.insert(username.to_string(), hash_password(password));
        self.save()
    }

    /// Check a username/password pair. Never modifies the store.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if self.users.is_empty() {
            return Err(AuthError::NoUsers);
        }
        match self.users.get(username) {
            Some(digest) if *digest == hash_password(password) => Ok(Session::new(username)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn save(&self) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&self.users)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
