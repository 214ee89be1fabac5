//! Configuration for the authentication layer
//!
//! Provides the TOML-backed [`AuthConfig`] and the assembly of configured
//! authenticators into the set a [`Negotiator`](crate::auth::Negotiator)
//! is built from.

use crate::auth::{Authenticator, NoAuthAuthenticator, UserPassAuthenticator};
use crate::credentials::StaticCredentials;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Authentication configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Require clients to authenticate (disables the no-auth method)
    #[serde(default)]
    pub auth_required: bool,

    /// Username -> password table for the username/password method
    #[serde(default)]
    pub users: HashMap<String, String>,
}

impl AuthConfig {
    /// Check if any credentials are configured
    pub fn has_credentials(&self) -> bool {
        !self.users.is_empty()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.auth_required && !self.has_credentials() {
            return Err("Authentication required but no credentials configured".to_string());
        }
        Ok(())
    }

    /// Assemble the authenticators this configuration enables.
    ///
    /// A user table enables username/password over [`StaticCredentials`];
    /// unless authentication is required, the no-auth method is offered
    /// as well.
    pub fn build_authenticators(&self) -> Vec<Box<dyn Authenticator>> {
        let mut authenticators: Vec<Box<dyn Authenticator>> = Vec::new();

        if self.has_credentials() {
            let store = StaticCredentials::from(self.users.clone());
            authenticators.push(Box::new(UserPassAuthenticator::new(store)));
        }

        if !self.auth_required {
            authenticators.push(Box::new(NoAuthAuthenticator));
        }

        authenticators
    }
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AuthConfig> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string
pub fn parse_config(content: &str) -> Result<AuthConfig> {
    toml::from_str(content).with_context(|| "Failed to parse configuration")
}
