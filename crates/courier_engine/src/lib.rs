//! Courier engine: payload assembly and submission effect execution.
mod engine;
mod payload;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use payload::{load_file, FilePayload, SubmissionDraft, SubmissionRequest};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter, DEFAULT_ENDPOINT};
pub use types::{EngineEvent, RequestId, SubmitError, SubmitFailureKind, SubmitReceipt};
