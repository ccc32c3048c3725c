//! Error types for the engine boundaries.
//!
//! - [`ConfigError`] - Site/page configuration could not be loaded
//! - [`EvaluatorError`] - Eligibility check failed (transport or logic)
//! - [`RenderError`] - A single renderer could not produce output
//!
//! Only [`ConfigError`] is fatal for a page. The other two are contained by
//! the gate controller and the dispatcher respectively.

use thiserror::Error;

/// Site configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration is not valid JSON or has the wrong shape
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Requested page key does not exist
    #[error("page '{0}' not found")]
    PageNotFound(String),
}

/// Eligibility evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    /// Request could not be sent or the connection failed
    #[error("network error: {0}")]
    Transport(String),
    /// Evaluator answered with a non-success status
    #[error("evaluator returned HTTP {0}")]
    Status(u16),
    /// Response body could not be decoded
    #[error("malformed evaluator response: {0}")]
    Decode(String),
    /// Evaluator reported a logical failure in its payload
    #[error("{0}")]
    Reported(String),
}

/// Renderer errors, isolated to the section that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A required setting is absent
    #[error("missing setting '{0}'")]
    MissingSetting(&'static str),
    /// A setting is present but unusable
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// Setting key
        key: &'static str,
        /// Human-readable reason
        reason: String,
    },
    /// Renderer-specific failure
    #[error("render failed: {0}")]
    Failed(String),
}
