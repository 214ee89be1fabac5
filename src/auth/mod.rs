//! SOCKS5 authentication negotiation
//!
//! Handles the method negotiation that opens every SOCKS5 connection:
//! reading the client's proposed methods, selecting a mutually supported
//! one, and running that method's sub-negotiation. Individual methods
//! implement the [`Authenticator`] trait; the [`Negotiator`] owns the
//! method registry and drives the exchange.

mod none;
mod password;

pub use none::NoAuthAuthenticator;
pub use password::UserPassAuthenticator;

use crate::config::AuthConfig;
use crate::consts::*;
use crate::error::NegotiationError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Byte-stream duplex a negotiation runs over.
///
/// Blanket-implemented for anything that is both an async reader and
/// writer, so authenticators can be trait objects while callers keep
/// using concrete stream types.
pub trait Conn: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> Conn for T {}

/// Request-scoped state threaded through a single negotiation.
///
/// Created by the caller per connection and discarded after the request
/// completes. Authenticators and credential stores may enrich it; the
/// request layer reads it once negotiation succeeds.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    /// Username recorded by a successful username/password negotiation
    pub username: Option<String>,
}

/// A single SOCKS5 authentication method.
///
/// Each implementation owns the byte exchange for its method. `negotiate`
/// is called only after the negotiator has already chosen this method, so
/// the implementation starts by confirming the selection to the client.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The SOCKS5 method code this authenticator implements
    fn code(&self) -> u8;

    /// Run the method-specific sub-negotiation on the stream
    async fn negotiate(
        &self,
        ctx: &mut AuthContext,
        stream: &mut dyn Conn,
    ) -> Result<(), NegotiationError>;
}

/// Server-side method negotiation.
///
/// Holds the registry of configured authenticators, keyed by method code.
/// The registry is built once and never mutated, so a `Negotiator` can be
/// shared across all concurrently negotiating connections.
pub struct Negotiator {
    methods: HashMap<u8, Box<dyn Authenticator>>,
}

impl Negotiator {
    /// Build the method registry from a list of authenticators.
    ///
    /// Codes must be unique; a duplicate replaces the earlier entry.
    pub fn new(authenticators: Vec<Box<dyn Authenticator>>) -> Self {
        let mut methods = HashMap::with_capacity(authenticators.len());
        for authenticator in authenticators {
            methods.insert(authenticator.code(), authenticator);
        }
        Self { methods }
    }

    /// Build a negotiator from an [`AuthConfig`].
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.build_authenticators())
    }

    /// Whether a method code is registered.
    pub fn supports(&self, method: u8) -> bool {
        self.methods.contains_key(&method)
    }

    /// Negotiate authentication on a freshly accepted connection.
    ///
    /// Reads the client's version byte and proposed methods, selects the
    /// first proposed method present in the registry (client order, no
    /// fallback if that method's own negotiation then fails), and runs its
    /// sub-negotiation. Returns the selected method code on success.
    ///
    /// If no proposed method is registered, `[VER, 0xFF]` is written back
    /// and the connection must be abandoned by the caller.
    pub async fn authenticate<S>(
        &self,
        ctx: &mut AuthContext,
        stream: &mut S,
    ) -> Result<u8, NegotiationError>
    where
        S: AsyncRead + AsyncWrite + Send + Unpin,
    {
        // The version byte is read and classified on its own, before the
        // method count, so a bad version never surfaces as a short read
        let mut version = [0u8; 1];
        stream.read_exact(&mut version).await?;

        if version[0] != SOCKS5_VERSION {
            return Err(NegotiationError::UnsupportedVersion(version[0]));
        }

        let mut count = [0u8; 1];
        stream.read_exact(&mut count).await?;

        let mut proposed = vec![0u8; count[0] as usize];
        stream.read_exact(&mut proposed).await?;

        // First mutually supported method wins, in the order the client
        // proposed them. A method that later fails its own sub-negotiation
        // does not fall back to the next proposal.
        for method in proposed {
            let authenticator = match self.methods.get(&method) {
                Some(authenticator) => authenticator,
                None => continue,
            };

            tracing::debug!(method, "selected authentication method");
            authenticator.negotiate(ctx, &mut *stream).await?;
            return Ok(method);
        }

        // No usable method; tell the client before giving up
        tracing::debug!("no acceptable authentication method");
        stream
            .write_all(&[SOCKS5_VERSION, SOCKS5_AUTH_METHOD_NOT_ACCEPTABLE])
            .await?;
        stream.flush().await?;

        Err(NegotiationError::NoAcceptableMethod)
    }
}

impl std::fmt::Debug for Negotiator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut codes: Vec<u8> = self.methods.keys().copied().collect();
        codes.sort_unstable();
        f.debug_struct("Negotiator").field("methods", &codes).finish()
    }
}
