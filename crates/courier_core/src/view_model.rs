/// Status text shown when the endpoint answers with a failure status.
pub const MSG_REJECTED_RETRY: &str = "The server rejected the submission. Please try again.";

/// Status text shown when the request itself fails: network trouble, a
/// timeout, an unreadable file, or a reply body that did not parse.
pub const MSG_UPLOAD_ERROR: &str = "An error occurred while uploading the file.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub title: String,
    pub author: String,
    pub file_path: Option<String>,
    pub submit_enabled: bool,
    pub status: String,
    pub dirty: bool,
}
