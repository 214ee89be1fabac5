//! Username/password authentication (RFC 1929)
//!
//! Runs the sub-negotiation that follows selection of method 0x02:
//!
//! Client sends:
//! ```text
//! +----+------+----------+------+----------+
//! |VER | ULEN |  UNAME   | PLEN |  PASSWD  |
//! +----+------+----------+------+----------+
//! | 1  |  1   | 0 to 255 |  1   | 0 to 255 |
//! +----+------+----------+------+----------+
//! ```
//!
//! Server responds:
//! ```text
//! +----+--------+
//! |VER | STATUS |
//! +----+--------+
//! | 1  |   1    |
//! +----+--------+
//! ```
//!
//! The identity check itself is delegated to a
//! [`CredentialStore`](crate::credentials::CredentialStore).

use super::{AuthContext, Authenticator, Conn};
use crate::consts::*;
use crate::credentials::CredentialStore;
use crate::error::NegotiationError;
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Authenticator for the username/password method, backed by a credential
/// store.
#[derive(Debug, Clone)]
pub struct UserPassAuthenticator<C> {
    credentials: C,
}

impl<C: CredentialStore> UserPassAuthenticator<C> {
    /// Wrap a credential store.
    pub fn new(credentials: C) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl<C: CredentialStore> Authenticator for UserPassAuthenticator<C> {
    fn code(&self) -> u8 {
        SOCKS5_AUTH_METHOD_PASSWORD
    }

    async fn negotiate(
        &self,
        ctx: &mut AuthContext,
        stream: &mut dyn Conn,
    ) -> Result<(), NegotiationError> {
        // Tell the client which sub-protocol follows
        stream
            .write_all(&[SOCKS5_VERSION, SOCKS5_AUTH_METHOD_PASSWORD])
            .await?;
        stream.flush().await?;

        // Sub-negotiation version and username length
        let mut header = [0u8; 2];
        stream.read_exact(&mut header).await?;

        if header[0] != SOCKS5_AUTH_VERSION {
            return Err(NegotiationError::UnsupportedAuthVersion(header[0]));
        }

        // Zero-length fields are legal and match the empty string
        let mut username = vec![0u8; header[1] as usize];
        stream.read_exact(&mut username).await?;

        let mut len = [0u8; 1];
        stream.read_exact(&mut len).await?;
        let mut password = vec![0u8; len[0] as usize];
        stream.read_exact(&mut password).await?;

        let username = String::from_utf8_lossy(&username).into_owned();
        let password = String::from_utf8_lossy(&password).into_owned();

        // The status byte is always written before reporting failure, so
        // the client gets a definitive response either way
        if self.credentials.valid(ctx, &username, &password) {
            stream
                .write_all(&[SOCKS5_AUTH_VERSION, AUTH_SUCCESS])
                .await?;
            stream.flush().await?;

            tracing::debug!(user = %username, "authentication successful");
            ctx.username = Some(username);
            Ok(())
        } else {
            stream
                .write_all(&[SOCKS5_AUTH_VERSION, AUTH_FAILURE])
                .await?;
            stream.flush().await?;

            tracing::warn!(user = %username, "authentication failed");
            Err(NegotiationError::AuthFailed)
        }
    }
}
