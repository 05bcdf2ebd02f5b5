//! Authentication credentials for bitbank's private API
//!
//! Implements HMAC-SHA256 signing as required by bitbank's private endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// API key header
pub const ACCESS_KEY: &str = "ACCESS-KEY";
/// Nonce header
pub const ACCESS_NONCE: &str = "ACCESS-NONCE";
/// Signature header
pub const ACCESS_SIGNATURE: &str = "ACCESS-SIGNATURE";
/// Content type sent with every private request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BITBANK_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BITBANK_API_SECRET";

/// Last nonce handed out in this process
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// API credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret, used as the HMAC key
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both values must be non-empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITBANK_API_KEY` and `BITBANK_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Generate a nonce for the next request
    ///
    /// Millisecond timestamp, bumped past the previous nonce when the clock
    /// has not advanced (or went backwards) so no value is handed out twice.
    pub fn generate_nonce() -> u64 {
        let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as u64,
            Err(_) => {
                warn!("System clock is before the Unix epoch");
                0
            }
        };

        let mut last = LAST_NONCE.load(Ordering::SeqCst);
        loop {
            let next = now.max(last + 1);
            match LAST_NONCE.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }

    /// Sign a request for bitbank's API
    ///
    /// `hex(HMAC-SHA256(secret, nonce + content))`
    ///
    /// # Arguments
    /// * `nonce` - Nonce sent in `ACCESS-NONCE`
    /// * `content` - Path with query string (GET) or JSON body (POST)
    pub fn sign(&self, nonce: &str, content: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(nonce.as_bytes());
        mac.update(content.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Signer for a single private request
///
/// Holds the nonce drawn at construction; build a new signer per request.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::with_nonce(credentials, Credentials::generate_nonce())
    }

    /// Create a signer for a caller-chosen nonce
    pub fn with_nonce(credentials: &'a Credentials, nonce: u64) -> Self {
        Self {
            credentials,
            nonce: nonce.to_string(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request content
    pub fn sign(&self, content: &str) -> String {
        self.credentials.sign(&self.nonce, content)
    }

    /// Authentication headers for a request over `content`
    pub fn headers(&self, content: &str) -> [(&'static str, String); 4] {
        [
            (ACCESS_KEY, self.api_key().to_string()),
            (ACCESS_NONCE, self.nonce.clone()),
            (ACCESS_SIGNATURE, self.sign(content)),
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
        ]
    }
}
