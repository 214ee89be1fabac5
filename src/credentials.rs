//! Credential stores for username/password authentication
//!
//! Storage of credentials is decoupled from the wire protocol: the
//! [`UserPassAuthenticator`](crate::auth::UserPassAuthenticator) only ever
//! talks to a [`CredentialStore`]. [`StaticCredentials`] is the built-in
//! in-memory implementation; anything backed by a file, database, or
//! directory service can be swapped in by implementing the trait.

use crate::auth::AuthContext;
use std::collections::HashMap;

/// Pluggable identity-verification backend.
///
/// Implementations must be read-only during negotiation: the store is shared
/// across all concurrently negotiating connections without locking. The
/// context is passed through so an implementation can attach request-scoped
/// metadata (an audit identity, for example) for the downstream request
/// layer.
pub trait CredentialStore: Send + Sync {
    /// Check a username/password pair, returning `true` on an exact match.
    ///
    /// An unknown username is a failed match, not an error.
    fn valid(&self, ctx: &mut AuthContext, user: &str, password: &str) -> bool;
}

/// In-memory credential store backed by an exact-match table.
///
/// The table is fixed at construction. Lookups require the username key to
/// be present and the password to compare equal byte-for-byte; there is no
/// hashing, prefix matching, or case folding. Empty passwords are legal
/// entries.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create a store from a username -> password table.
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<HashMap<String, String>> for StaticCredentials {
    fn from(users: HashMap<String, String>) -> Self {
        Self::new(users)
    }
}

impl FromIterator<(String, String)> for StaticCredentials {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CredentialStore for StaticCredentials {
    fn valid(&self, _ctx: &mut AuthContext, user: &str, password: &str) -> bool {
        match self.users.get(user) {
            Some(expected) => expected == password,
            None => false,
        }
    }
}
