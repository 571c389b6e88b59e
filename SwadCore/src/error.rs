//! Error types for `SwadCore`

use std::path::PathBuf;

use thiserror::Error;

use crate::question::ImportError;
use crate::xml::XmlError;

/// The error type for `SwadCore` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path given on the command line or in the config does not exist.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    // ==================== Action Registry Errors ====================
    /// No action with this name exists in the table.
    #[error("unknown action name: {0}")]
    UnknownActionName(String),

    /// A handler was registered for a phase the action does not declare.
    #[error("action {action} does not declare a {phase} phase")]
    UndeclaredPhase {
        /// Name of the action.
        action: &'static str,
        /// `"pre"` or `"post"`.
        phase: &'static str,
    },

    /// A handler was registered twice for the same action and phase.
    #[error("duplicate {phase} handler for action {action}")]
    DuplicateHandler {
        /// Name of the action.
        action: &'static str,
        /// `"pre"` or `"post"`.
        phase: &'static str,
    },

    /// A role, tab or hierarchy level name could not be parsed.
    #[error("invalid {kind}: {value}")]
    InvalidName {
        /// What was being parsed (`"role"`, `"tab"`, ...).
        kind: &'static str,
        /// The offending input.
        value: String,
    },

    // ==================== XML Errors ====================
    /// XML parse error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// XML writer error.
    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    // ==================== Question Errors ====================
    /// The question import was abandoned.
    #[error("question import failed: {0}")]
    Import(#[from] ImportError),

    // ==================== Serialization Errors ====================
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML configuration could not be written.
    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // ==================== Config Errors ====================
    /// No platform config directory could be determined.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// A configured path could not be expanded.
    #[error("cannot expand path {path}: {message}")]
    PathExpansion {
        /// The raw configured path.
        path: String,
        /// The expansion failure.
        message: String,
    },
}

/// Result type alias for `SwadCore` operations.
pub type Result<T> = std::result::Result<T, Error>;
