use std::fmt;

pub type RequestId = u64;

/// Completion notice for one dispatched submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmissionSettled {
        request: RequestId,
        result: Result<SubmitReceipt, SubmitError>,
    },
}

/// Parsed reply from a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: SubmitFailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: SubmitFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailureKind {
    /// The configured endpoint is not a parseable URL.
    InvalidEndpoint,
    /// The selected file could not be read into a payload.
    FileUnreadable { path: String },
    /// The endpoint answered with a non-success status.
    Rejected { status: u16 },
    Timeout,
    Network,
    /// The endpoint reported success but the body was not the expected JSON.
    MalformedReply,
}

impl fmt::Display for SubmitFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitFailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            SubmitFailureKind::FileUnreadable { path } => write!(f, "unreadable file {path}"),
            SubmitFailureKind::Rejected { status } => write!(f, "rejected with status {status}"),
            SubmitFailureKind::Timeout => write!(f, "timeout"),
            SubmitFailureKind::Network => write!(f, "network error"),
            SubmitFailureKind::MalformedReply => write!(f, "malformed reply body"),
        }
    }
}
