//! Credentials and request signing for bitbank's private REST API
//!
//! Every private request carries four headers:
//!
//! | header             | value |
//! |--------------------|-------|
//! | `ACCESS-KEY`       | API key |
//! | `ACCESS-NONCE`     | millisecond nonce, strictly increasing per process |
//! | `ACCESS-SIGNATURE` | `hex(HMAC-SHA256(secret, nonce + content))` |
//! | `Content-Type`     | `application/json` |
//!
//! `content` is the request path with its query string for GET requests and
//! the JSON body for POST requests.
//!
//! # Example
//!
//! ```no_run
//! use bitbank_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signer = RequestSigner::new(&creds);
//!     for (name, value) in signer.headers("/v1/user/assets") {
//!         println!("{}: {}", name, value);
//!     }
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{
    Credentials, RequestSigner, ACCESS_KEY, ACCESS_NONCE, ACCESS_SIGNATURE, API_KEY_ENV,
    API_SECRET_ENV, CONTENT_TYPE_JSON,
};
pub use error::{AuthError, AuthResult};
