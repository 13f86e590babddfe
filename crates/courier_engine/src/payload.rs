use std::fs;
use std::path::Path;

use crate::{SubmitError, SubmitFailureKind};

/// Form fields exactly as the user left them. Nothing here is validated;
/// empty values travel as empty parts and a missing file is simply omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionDraft {
    pub title: String,
    pub author: String,
    pub file_path: Option<String>,
}

/// Draft with the selected file resolved into bytes, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub title: String,
    pub author: String,
    pub file: Option<FilePayload>,
}

/// In-memory copy of the selected file. Submissions carry one document, so
/// the whole file is buffered rather than streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SubmissionRequest {
    /// Resolves a draft into a request, reading the file if one was chosen.
    pub fn from_draft(draft: &SubmissionDraft) -> Result<Self, SubmitError> {
        let file = match draft.file_path.as_deref() {
            Some(path) => Some(load_file(path)?),
            None => None,
        };
        Ok(Self {
            title: draft.title.clone(),
            author: draft.author.clone(),
            file,
        })
    }
}

/// Reads the selected file into a payload, guessing the part's content type
/// from the path and falling back to application/octet-stream.
pub fn load_file(path: &str) -> Result<FilePayload, SubmitError> {
    let bytes = fs::read(path).map_err(|err| {
        SubmitError::new(
            SubmitFailureKind::FileUnreadable {
                path: path.to_string(),
            },
            err.to_string(),
        )
    })?;

    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(FilePayload {
        file_name,
        mime: mime.essence_str().to_string(),
        bytes,
    })
}
