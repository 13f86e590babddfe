//! Courier core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, SubmissionOutcome};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, MSG_REJECTED_RETRY, MSG_UPLOAD_ERROR};
