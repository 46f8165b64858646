//! Upload widget state.
//!
//! [`UploadForm`] is the single record behind the upload widget. Every
//! event handler goes through one of its transition functions, so the rules
//! (one request at a time, error cleared on a new attempt, busy flag dropped
//! only once the response is resolved) live here rather than in the view.

use crate::config::SELECTED_FILE_LABEL;
use crate::types::{AppResult, FileHandle, Questions, UploadError};

/// Whether a request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
}

/// Local state of the upload widget.
#[derive(Clone, Debug)]
pub struct UploadForm<F> {
    file: Option<F>,
    state: UploadState,
    error: Option<String>,
    drag_active: bool,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            state: UploadState::Idle,
            error: None,
            drag_active: false,
        }
    }
}

impl<F: FileHandle> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Name of the selected file, if any.
    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(FileHandle::file_name)
    }

    /// Line shown under the drop zone once a file is chosen.
    pub fn selected_label(&self) -> Option<String> {
        self.file_name()
            .map(|name| format!("{}{}", SELECTED_FILE_LABEL, name))
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_uploading(&self) -> bool {
        self.state == UploadState::Uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Submit is enabled only with a file chosen and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    /// Store a picked or dropped file, replacing any previous one.
    pub fn select(&mut self, file: F) {
        self.file = Some(file);
        self.error = None;
    }

    /// Start an upload attempt.
    ///
    /// Returns the file to send. Without a file the "choose a file" message
    /// is set and nothing should be sent. While a request is in flight the
    /// call is refused and state is left untouched.
    pub fn begin_upload(&mut self) -> AppResult<F> {
        if self.is_uploading() {
            return Err(UploadError::UploadInProgress);
        }
        let Some(file) = self.file.clone() else {
            let err = UploadError::NoFileSelected;
            self.error = Some(err.to_string());
            return Err(err);
        };
        self.state = UploadState::Uploading;
        self.error = None;
        Ok(file)
    }

    /// Record the outcome of the request and go back to idle.
    ///
    /// Returns the questions to hand to the caller on success.
    pub fn finish(&mut self, outcome: AppResult<Questions>) -> Option<Questions> {
        self.state = UploadState::Idle;
        match outcome {
            Ok(questions) => {
                self.error = None;
                Some(questions)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Drag entered or moved over the drop zone.
    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Drop on the zone; selects the first dropped file, if there is one.
    pub fn drop_file(&mut self, file: Option<F>) {
        self.drag_active = false;
        if let Some(file) = file {
            self.select(file);
        }
    }
}
