//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Handles to user-chosen files
//! - **API Types** - Backend response structures
//! - **Error Types** - Upload failures as shown to the user

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CONNECTION_FAILED_MESSAGE, NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};

// =============================================================================
// File Types
// =============================================================================

/// A file picked or dropped by the user.
///
/// The widget only needs the name for display; the content is handed
/// untouched to the uploader.
pub trait FileHandle: Clone + 'static {
    /// File name as reported by the platform.
    fn file_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Parsed questions returned by the backend.
///
/// The widget never looks inside; it is forwarded to the caller as is.
pub type Questions = serde_json::Value;

/// Response from the backend upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the backend managed to parse the file
    #[serde(default)]
    pub success: bool,
    /// Parsed questions, present on success
    #[serde(default)]
    pub questions: Option<Questions>,
    /// Human-readable reason, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a non-2xx response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Upload failures.
///
/// `Display` renders exactly the text shown in the error panel.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Submit pressed with no file chosen. No request is sent.
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// Submit pressed while a request is still in flight.
    #[error("An upload is already in progress")]
    UploadInProgress,

    /// Backend answered but reported `success: false`.
    #[error("{}", .0.as_deref().unwrap_or(UPLOAD_FAILED_MESSAGE))]
    Rejected(Option<String>),

    /// Network failure or non-2xx status.
    #[error("{}", .0.as_deref().unwrap_or(CONNECTION_FAILED_MESSAGE))]
    Transport(Option<String>),
}

impl UploadError {
    /// Backend rejection, treating an empty reason as no reason.
    pub fn rejected(reason: Option<String>) -> Self {
        UploadError::Rejected(reason.filter(|r| !r.is_empty()))
    }

    /// Transport failure, treating an empty reason as no reason.
    pub fn transport(reason: Option<String>) -> Self {
        UploadError::Transport(reason.filter(|r| !r.is_empty()))
    }
}

/// Result type alias for upload operations.
pub type AppResult<T> = Result<T, UploadError>;
