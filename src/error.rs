//! Error types for registry provisioning.

use thiserror::Error;

/// Result type alias for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors that can occur while provisioning a registry.
///
/// Every variant carries the underlying message verbatim; nothing is
/// wrapped or reinterpreted on the way back to the caller.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The configured registry host is not a usable `host:port` authority.
    #[error("invalid registry host {host:?}: {reason}")]
    Configuration { host: String, reason: String },

    /// The target machine's IP address could not be determined.
    #[error("could not resolve machine address: {0}")]
    Resolution(String),

    /// The remote transport reported a failure for a command.
    #[error("remote command failed: {0}")]
    RemoteExecution(String),

    /// The embedded command template is malformed.
    #[error("registry command template: {0}")]
    Template(String),
}
