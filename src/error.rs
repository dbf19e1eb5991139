//! Unified error types for oxidom

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for oxidom
#[derive(Error, Debug)]
pub enum Error {
    /// Errors raised by the wrapped automation client, surfaced unchanged
    #[error("CDP error: {0}")]
    Cdp(String),

    /// A script threw inside the browser
    #[error("Script exception: {0}")]
    ScriptException(String),

    /// A remote JSON value could not be parsed into the requested type
    #[error("Coercion error: {0}")]
    Coercion(String),

    /// The browser-reported class name does not match the requested wrapper
    #[error("Type mismatch: requested {requested}, browser reported {actual}")]
    TypeMismatch {
        /// Requested wrapper type name
        requested: &'static str,
        /// Class name reported by the browser
        actual: String,
    },

    /// Operation attempted on a handle that has already been disposed
    #[error("Handle disposed: {0}")]
    HandleDisposed(String),

    /// Wait condition not met in time
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new CDP error
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }

    /// Create a new script exception error
    pub fn script_exception<S: Into<String>>(msg: S) -> Self {
        Error::ScriptException(msg.into())
    }

    /// Create a new coercion error
    pub fn coercion<S: Into<String>>(msg: S) -> Self {
        Error::Coercion(msg.into())
    }

    /// Create a new type mismatch error
    pub fn type_mismatch<S: Into<String>>(requested: &'static str, actual: S) -> Self {
        Error::TypeMismatch {
            requested,
            actual: actual.into(),
        }
    }

    /// Create a new handle disposed error
    pub fn handle_disposed<S: Into<String>>(object_id: S) -> Self {
        Error::HandleDisposed(object_id.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
