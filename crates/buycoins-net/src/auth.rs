//! API credentials.
//!
//! Credentials are an explicit value: build them once at start-up and pass
//! them to every call. Nothing in this crate stores them globally.

use std::fmt;

use crate::error::{NetworkError, Result};

/// Environment variable holding the public key.
pub const PUBLIC_KEY_ENV: &str = "BUYCOINS_PUBLIC_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "BUYCOINS_SECRET_KEY";

/// A public/secret key pair, sent as HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create credentials, rejecting blank keys.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let public_key = public_key.into();
        let secret_key = secret_key.into();
        if public_key.trim().is_empty() {
            return Err(NetworkError::Authentication(
                "Invalid public key. Public key should be a string".into(),
            ));
        }
        if secret_key.trim().is_empty() {
            return Err(NetworkError::Authentication(
                "Invalid secret key. Secret key should be a string".into(),
            ));
        }
        Ok(Self {
            public_key,
            secret_key,
        })
    }

    /// Read credentials from `BUYCOINS_PUBLIC_KEY` and `BUYCOINS_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match (lookup(PUBLIC_KEY_ENV), lookup(SECRET_KEY_ENV)) {
            (Some(public_key), Some(secret_key)) => Self::new(public_key, secret_key),
            _ => Err(NetworkError::Authentication(format!(
                "Please set up your public and secret keys ({PUBLIC_KEY_ENV}, {SECRET_KEY_ENV})."
            ))),
        }
    }

    /// The public key, used as the basic-auth username.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The secret key, used as the basic-auth password.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
