use crate::state::SubmitPhase;
use crate::view_model::{MSG_REJECTED_RETRY, MSG_UPLOAD_ERROR};
use crate::{AppState, Effect, Msg, SubmissionOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TitleChanged(title) => {
            state.set_title(title);
            Vec::new()
        }
        Msg::AuthorChanged(author) => {
            state.set_author(author);
            Vec::new()
        }
        Msg::FileChosen(path) => {
            state.choose_file(path);
            Vec::new()
        }
        Msg::SubmitPressed => {
            // One request in flight at a time; presses while submitting are
            // dropped until the active request settles.
            if state.phase() != SubmitPhase::Idle {
                return (state, Vec::new());
            }
            let request = state.begin_submission();
            // Fields are snapshotted exactly as entered. Empty values and a
            // missing file selection go out as-is; validation is not this
            // component's job.
            vec![Effect::SendSubmission {
                request,
                title: state.title().to_string(),
                author: state.author().to_string(),
                file_path: state.file_path().map(ToOwned::to_owned),
            }]
        }
        Msg::SubmissionSettled { request, outcome } => {
            match state.phase() {
                SubmitPhase::Submitting { request: active } if active == request => {
                    let status = match outcome {
                        SubmissionOutcome::Delivered { message } => message,
                        SubmissionOutcome::Rejected => MSG_REJECTED_RETRY.to_string(),
                        SubmissionOutcome::TransportFailed => MSG_UPLOAD_ERROR.to_string(),
                    };
                    state.settle_submission(status);
                }
                // Stale settle; the display belongs to the active request.
                _ => {}
            }
            Vec::new()
        }
    };

    (state, effects)
}
