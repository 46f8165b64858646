//! HTTP upload of quiz files to the backend.

use std::fmt::Display;

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{upload_url, UPLOAD_FIELD};
use crate::types::{AppResult, ErrorBody, FileHandle, Questions, UploadError, UploadResponse};

/// Sends a selected file to the backend and returns its parsed questions.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    type File: FileHandle;

    /// Perform exactly one request for `file`. No retries.
    async fn upload(&self, file: &Self::File) -> AppResult<Questions>;
}

/// Multipart POST to the backend upload endpoint.
#[derive(Clone, Debug)]
pub struct HttpUploader {
    url: String,
}

impl HttpUploader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpUploader {
    fn default() -> Self {
        Self::new(upload_url())
    }
}

impl Uploader for HttpUploader {
    type File = File;

    async fn upload(&self, file: &File) -> AppResult<Questions> {
        // The browser fills in the multipart Content-Type and boundary
        let form_data = build_form(file)?;

        let request = Request::post(&self.url).body(form_data).map_err(|e| {
            log::error!("Failed to build request: {}", e);
            UploadError::transport(None)
        })?;

        let response = request.send().await.map_err(|e| {
            log::warn!("HTTP request failed: {}", e);
            UploadError::transport(None)
        })?;

        let ok = response.ok();
        let status = response.status();
        if !ok {
            log::warn!("Server error ({})", status);
        }

        interpret_body(ok, response.text().await)
    }
}

/// Multipart payload with the file under [`UPLOAD_FIELD`], keeping its name.
pub fn build_form(file: &File) -> AppResult<FormData> {
    let form_data = FormData::new().map_err(|e| {
        log::error!("Failed to create FormData: {:?}", e);
        UploadError::transport(None)
    })?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| {
            log::error!("Failed to append file: {:?}", e);
            UploadError::transport(None)
        })?;
    Ok(form_data)
}

/// Outcome of a response whose body may have failed to read.
///
/// A 2xx body cut off mid-stream is a transport failure. For other statuses
/// an unreadable body is the same as an empty one.
pub fn interpret_body<E: Display>(ok: bool, body: Result<String, E>) -> AppResult<Questions> {
    match body {
        Ok(body) => interpret_response(ok, &body),
        Err(e) if ok => {
            log::warn!("Failed to read response body: {}", e);
            Err(UploadError::transport(None))
        }
        Err(e) => {
            log::warn!("Failed to read error body: {}", e);
            interpret_response(ok, "")
        }
    }
}

/// Turn a resolved HTTP response into the upload outcome.
///
/// `ok` is whether the status was 2xx. For 2xx bodies only an explicit
/// `success: true` counts as success; anything else is a rejection. For
/// other statuses the body's `error` text is used when there is one.
pub fn interpret_response(ok: bool, body: &str) -> AppResult<Questions> {
    if !ok {
        let reason = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(UploadError::transport(reason));
    }

    match serde_json::from_str::<UploadResponse>(body) {
        Ok(UploadResponse { success: true, questions, .. }) => {
            Ok(questions.unwrap_or(Questions::Null))
        }
        Ok(response) => Err(UploadError::rejected(response.error)),
        Err(e) => {
            log::warn!("Failed to parse response: {}", e);
            Err(UploadError::rejected(None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONNECTION_FAILED_MESSAGE, NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
    use crate::state::UploadForm;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str);

    impl FileHandle for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Backend stand-in returning a canned outcome and counting requests.
    struct MockUploader {
        outcome: AppResult<Questions>,
        requests: RefCell<Vec<String>>,
    }

    impl MockUploader {
        fn replying(ok: bool, body: &str) -> Self {
            Self::with_outcome(interpret_response(ok, body))
        }

        fn with_outcome(outcome: AppResult<Questions>) -> Self {
            Self {
                outcome,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Uploader for MockUploader {
        type File = TestFile;

        async fn upload(&self, file: &TestFile) -> AppResult<Questions> {
            self.requests.borrow_mut().push(file.file_name());
            self.outcome.clone()
        }
    }

    /// Mirrors the widget's submit handler.
    fn submit(
        form: &mut UploadForm<TestFile>,
        uploader: &MockUploader,
        on_processed: impl Fn(Questions),
    ) {
        let Ok(file) = form.begin_upload() else {
            return;
        };
        assert!(form.is_uploading());
        let outcome = block_on(uploader.upload(&file));
        if let Some(questions) = form.finish(outcome) {
            on_processed(questions);
        }
    }

    #[test]
    fn test_success_response() {
        let body = r#"{"success": true, "questions": [{"q": "2+2", "a": "4"}]}"#;
        assert_eq!(interpret_response(true, body), Ok(json!([{"q": "2+2", "a": "4"}])));
    }

    #[test]
    fn test_success_without_questions_forwards_null() {
        assert_eq!(interpret_response(true, r#"{"success": true}"#), Ok(Questions::Null));
    }

    #[test]
    fn test_rejection_uses_backend_error() {
        let result = interpret_response(true, r#"{"success": false, "error": "Unsupported format"}"#);
        assert_eq!(result, Err(UploadError::Rejected(Some("Unsupported format".into()))));
    }

    #[test]
    fn test_rejection_without_error_falls_back() {
        let err = interpret_response(true, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), UPLOAD_FAILED_MESSAGE);

        let err = interpret_response(true, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), UPLOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_http_error_uses_body_error() {
        let err = interpret_response(false, r#"{"error": "File too large"}"#).unwrap_err();
        assert_eq!(err, UploadError::Transport(Some("File too large".into())));
        assert_eq!(err.to_string(), "File too large");
    }

    #[test]
    fn test_http_error_without_body_falls_back() {
        for body in ["", "Bad Gateway", r#"{"message": "nope"}"#, r#"{"error": ""}"#] {
            let err = interpret_response(false, body).unwrap_err();
            assert_eq!(err.to_string(), CONNECTION_FAILED_MESSAGE, "body: {body:?}");
        }
    }

    #[test]
    fn test_unreadable_success_body_is_transport_failure() {
        let err = interpret_body(true, Err::<String, _>("stream closed")).unwrap_err();
        assert_eq!(err, UploadError::Transport(None));
        assert_eq!(err.to_string(), CONNECTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_unreadable_error_body_falls_back() {
        let err = interpret_body(false, Err::<String, _>("stream closed")).unwrap_err();
        assert_eq!(err.to_string(), CONNECTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_readable_body_is_interpreted() {
        let body = r#"{"success": false, "error": "Unsupported format"}"#.to_string();
        let err = interpret_body(true, Ok::<_, String>(body)).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported format");
    }

    #[test]
    fn test_http_uploader_targets_upload_endpoint() {
        assert_eq!(HttpUploader::default().url(), upload_url());
        assert_eq!(HttpUploader::new("http://localhost:5000/api/upload").url(), "http://localhost:5000/api/upload");
    }

    #[test]
    fn test_no_file_sends_nothing() {
        let uploader = MockUploader::replying(true, r#"{"success": true, "questions": []}"#);
        let calls = Cell::new(0);
        let mut form = UploadForm::new();

        submit(&mut form, &uploader, |_| calls.set(calls.get() + 1));

        assert_eq!(uploader.request_count(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(form.error(), Some(NO_FILE_MESSAGE));
    }

    #[test]
    fn test_dropped_file_uploaded_and_forwarded_once() {
        let uploader = MockUploader::replying(
            true,
            r#"{"success": true, "questions": [{"q": "2+2", "a": "4"}]}"#,
        );
        let received = RefCell::new(Vec::new());
        let mut form = UploadForm::new();

        // A failed attempt leaves an error behind; dropping a file clears it
        submit(&mut form, &uploader, |q| received.borrow_mut().push(q));
        assert!(form.error().is_some());

        form.drag_enter();
        form.drop_file(Some(TestFile("quiz.pdf")));
        assert!(form.error().is_none());
        assert_eq!(form.file_name().as_deref(), Some("quiz.pdf"));

        submit(&mut form, &uploader, |q| received.borrow_mut().push(q));

        assert_eq!(*uploader.requests.borrow(), vec!["quiz.pdf".to_string()]);
        assert_eq!(*received.borrow(), vec![json!([{"q": "2+2", "a": "4"}])]);
        assert!(form.error().is_none());
        assert!(form.can_submit());
    }

    #[test]
    fn test_rejected_file_shows_backend_message() {
        let uploader =
            MockUploader::replying(true, r#"{"success": false, "error": "Unsupported format"}"#);
        let calls = Cell::new(0);
        let mut form = UploadForm::new();
        form.select(TestFile("quiz.pdf"));

        submit(&mut form, &uploader, |_| calls.set(calls.get() + 1));

        assert_eq!(uploader.request_count(), 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(form.error(), Some("Unsupported format"));
        assert!(!form.is_uploading());
    }

    #[test]
    fn test_network_failure_shows_fallback() {
        let uploader = MockUploader::with_outcome(Err(UploadError::transport(None)));
        let calls = Cell::new(0);
        let mut form = UploadForm::new();
        form.select(TestFile("quiz.pdf"));

        submit(&mut form, &uploader, |_| calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 0);
        assert_eq!(form.error(), Some(CONNECTION_FAILED_MESSAGE));
        assert!(form.can_submit());
    }

    #[test]
    fn test_each_attempt_sends_one_request() {
        let uploader = MockUploader::replying(false, "");
        let mut form = UploadForm::new();
        form.select(TestFile("quiz.txt"));

        submit(&mut form, &uploader, |_| {});
        submit(&mut form, &uploader, |_| {});

        assert_eq!(uploader.request_count(), 2);
    }
}
