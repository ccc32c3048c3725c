//! Error types for the browser host.
//!
//! - [`WalletError`] - MetaMask/wallet connection and request errors
//! - [`FetchError`] - Network errors for configuration and widget requests
//!
//! Engine-level errors (configuration shape, evaluator, renderer) come from
//! `pagekit_core::error`.

use std::fmt;

/// Wallet-related errors for MetaMask/EIP-1193 integration.
#[derive(Debug, Clone)]
pub enum WalletError {
    /// Browser window not available
    NoWindow,
    /// MetaMask or compatible wallet not installed
    NotInstalled,
    /// Failed to create request object
    RequestCreationFailed,
    /// Request to wallet was rejected by user
    RequestRejected(String),
    /// No account returned from wallet
    NoAccount,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotInstalled => write!(f, "No wallet found. Install MetaMask to sign in."),
            Self::RequestCreationFailed => write!(f, "Failed to create wallet request"),
            Self::RequestRejected(msg) => write!(f, "Wallet request rejected: {}", msg),
            Self::NoAccount => write!(f, "No account returned from wallet"),
        }
    }
}

impl std::error::Error for WalletError {}

/// Network errors for GET requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}
