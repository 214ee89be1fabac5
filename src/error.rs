//! Error types for Sockauth
//!
//! This module defines the error classification returned by a failed
//! negotiation. Transport faults are kept distinct from protocol-level
//! rejections so callers can tell a broken connection apart from a client
//! that simply failed to authenticate.

use std::io;
use thiserror::Error;

/// Errors produced while negotiating authentication on a connection
#[derive(Error, Debug)]
pub enum NegotiationError {
    /// IO error on the underlying stream (including short reads)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported SOCKS version in the initial handshake byte
    #[error("Unsupported SOCKS version: {0}")]
    UnsupportedVersion(u8),

    /// Unsupported username/password sub-negotiation version
    #[error("Unsupported auth version: {0}")]
    UnsupportedAuthVersion(u8),

    /// None of the client's proposed methods are registered
    #[error("No supported authentication mechanism")]
    NoAcceptableMethod,

    /// Credential validation failed
    #[error("User authentication failed")]
    AuthFailed,
}

impl NegotiationError {
    /// Whether the error came from the transport rather than the protocol.
    ///
    /// Transport faults mean the connection is unusable; protocol-level
    /// errors mean the client received a definitive rejection first.
    pub fn is_transport(&self) -> bool {
        matches!(self, NegotiationError::Io(_))
    }
}
