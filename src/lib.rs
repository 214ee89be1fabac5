//! # Sockauth - SOCKS5 Authentication Negotiation
//!
//! Sockauth implements the authentication phase of a SOCKS5 server
//! handshake: method negotiation per RFC 1928 and the username/password
//! sub-negotiation per RFC 1929, with credential checking delegated to a
//! pluggable [`CredentialStore`].
//!
//! The surrounding server owns the listener, the per-connection tasks, and
//! everything after authentication (CONNECT/BIND/UDP-ASSOCIATE handling).
//! This crate only needs the connection's byte stream.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sockauth::{AuthContext, Negotiator, NoAuthAuthenticator};
//!
//! let negotiator = Negotiator::new(vec![Box::new(NoAuthAuthenticator)]);
//!
//! // per accepted connection:
//! let mut ctx = AuthContext::default();
//! let method = negotiator.authenticate(&mut ctx, &mut stream).await?;
//! ```
//!
//! ## Design
//!
//! Each authentication method implements the [`Authenticator`] trait. The
//! [`Negotiator`] keeps an immutable registry of them keyed by method code,
//! reads the client's proposal, and dispatches to the first proposed method
//! it supports. No fallback is attempted if that method's own
//! sub-negotiation then fails.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod auth;
pub mod config;
pub mod consts;
pub mod credentials;
pub mod error;

// Re-export commonly used items
pub use auth::{
    AuthContext, Authenticator, Negotiator, NoAuthAuthenticator, UserPassAuthenticator,
};
pub use config::{load_config, parse_config, AuthConfig};
pub use credentials::{CredentialStore, StaticCredentials};
pub use error::NegotiationError;

/// Version of the Sockauth library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the library
pub const NAME: &str = env!("CARGO_PKG_NAME");
