//! Application configuration.
//!
//! Centralized configuration for the QuizMe frontend. Values are baked in
//! at compile time; the backend URL can be overridden by setting
//! `QUIZME_BACKEND_URL` when running `trunk build`.

/// Default backend base URL.
///
/// The QuizMe backend that parses uploaded quiz files.
pub const DEFAULT_BACKEND_URL: &str = "https://quizme-backend-7qyo.onrender.com";

/// Path of the upload endpoint, relative to the backend URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field name holding the file.
pub const UPLOAD_FIELD: &str = "file";

/// Extensions offered by the file picker.
///
/// Advisory only: the picker filters on them, dropped files are not checked.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".xlsx", ".xls", ".docx", ".doc", ".txt", ".csv"];

/// Prefix of the line naming the chosen file.
pub const SELECTED_FILE_LABEL: &str = "Selected file: ";

/// Shown when the user submits without choosing a file.
pub const NO_FILE_MESSAGE: &str = "Please choose a file";

/// Shown when the backend rejects the file without saying why.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload the file";

/// Shown when the backend could not be reached.
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not reach the server";

/// Backend base URL, honoring the build-time override.
pub fn backend_url() -> &'static str {
    match option_env!("QUIZME_BACKEND_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

/// Full URL of the upload endpoint.
pub fn upload_url() -> String {
    format!("{}{}", backend_url().trim_end_matches('/'), UPLOAD_PATH)
}

/// Value for the picker's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}
