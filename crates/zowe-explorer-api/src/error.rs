//! API register error types.

use miette::Diagnostic;
use thiserror::Error;

use crate::capability::Capability;
use crate::types::error::ZosmfErrorBody;

/// Errors produced by the API register and the built-in backends.
#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    /// An extension tried to register an implementation that reports no
    /// profile type name.
    #[error("Internal error: A Zowe Explorer extension client tried to register an invalid {capability} API.")]
    #[diagnostic(
        code(zowe_api::invalid_implementation),
        help("the implementation's profile_type_name() must return a non-empty name")
    )]
    InvalidImplementation {
        /// Capability the registration was attempted for.
        capability: Capability,
    },

    /// No implementation is registered for the profile's type.
    #[error("Internal error: Tried to call a non-existing {capability} API in API register: {profile_type}")]
    #[diagnostic(code(zowe_api::unregistered_profile_type))]
    UnregisteredProfileType {
        /// Capability that was requested.
        capability: Capability,
        /// The offending profile type (may be empty).
        profile_type: String,
    },

    /// A profile lacks a connection attribute the backend requires.
    #[error("profile '{profile}' is missing required attribute '{field}'")]
    #[diagnostic(code(zowe_api::missing_profile_field))]
    MissingProfileField {
        /// Profile name.
        profile: String,
        /// Missing attribute key.
        field: &'static str,
    },

    /// A request URL could not be built from the profile.
    #[error("invalid URL '{url}': {message}")]
    #[diagnostic(code(zowe_api::invalid_url))]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser message.
        message: String,
    },

    /// A caller-supplied name or path is malformed for the operation.
    #[error("invalid argument: {0}")]
    #[diagnostic(code(zowe_api::invalid_argument))]
    InvalidArgument(String),

    /// A job ID matched no job.
    #[error("job {jobid} not found")]
    #[diagnostic(code(zowe_api::job_not_found))]
    JobNotFound {
        /// The job ID that was looked up.
        jobid: String,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    #[diagnostic(code(zowe_api::http))]
    Http(#[from] reqwest::Error),

    /// z/OSMF answered with a non-success status.
    #[error("z/OSMF error {status}: {message}")]
    #[diagnostic(code(zowe_api::zosmf))]
    Zosmf {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the raw response text.
        message: String,
        /// Parsed z/OSMF error body, when the server sent one.
        body: Option<ZosmfErrorBody>,
    },

    /// Local I/O failure (spool downloads, config files).
    #[error("I/O error: {0}")]
    #[diagnostic(code(zowe_api::io))]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload.
    #[error("JSON error: {0}")]
    #[diagnostic(code(zowe_api::json))]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {message}")]
    #[diagnostic(code(zowe_api::config))]
    Config {
        /// Config file path.
        path: String,
        /// Parser message.
        message: String,
    },
}

impl ApiError {
    /// HTTP status of a z/OSMF failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Zosmf { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
