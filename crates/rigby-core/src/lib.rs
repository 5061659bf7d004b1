//! rigby-core - Core types and traits for the Rigby control API client.

pub mod config;
pub mod envelope;
pub mod error;
pub mod token;
pub mod traits;
pub mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::Error;
pub use token::BearerToken;
pub use traits::Caller;
pub use types::{BaseUrl, RpcPath};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
