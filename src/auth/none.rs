//! No-authentication method
//!
//! Accepts every connection. The only byte exchange is the confirmation
//! that method 0x00 was selected.

use super::{AuthContext, Authenticator, Conn};
use crate::consts::{SOCKS5_AUTH_METHOD_NONE, SOCKS5_VERSION};
use crate::error::NegotiationError;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

/// Authenticator for the "no authentication required" method
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn code(&self) -> u8 {
        SOCKS5_AUTH_METHOD_NONE
    }

    async fn negotiate(
        &self,
        _ctx: &mut AuthContext,
        stream: &mut dyn Conn,
    ) -> Result<(), NegotiationError> {
        // Confirm the selection; nothing to read
        stream
            .write_all(&[SOCKS5_VERSION, SOCKS5_AUTH_METHOD_NONE])
            .await?;
        stream.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{duplex, AsyncReadExt};

    #[tokio::test]
    async fn test_no_auth_writes_selection() {
        let (mut client, mut server) = duplex(64);
        let mut ctx = AuthContext::default();

        NoAuthAuthenticator
            .negotiate(&mut ctx, &mut server)
            .await
            .unwrap();

        let mut reply = [0u8; 2];
        client.read_exact(&mut reply).await.unwrap();
        assert_eq!(reply, [SOCKS5_VERSION, SOCKS5_AUTH_METHOD_NONE]);
    }

    #[tokio::test]
    async fn test_no_auth_broken_pipe() {
        let (client, mut server) = duplex(64);
        drop(client);

        let mut ctx = AuthContext::default();
        let result = NoAuthAuthenticator.negotiate(&mut ctx, &mut server).await;
        assert!(matches!(result, Err(NegotiationError::Io(_))));
    }

    #[test]
    fn test_code() {
        assert_eq!(NoAuthAuthenticator.code(), SOCKS5_AUTH_METHOD_NONE);
    }
}
