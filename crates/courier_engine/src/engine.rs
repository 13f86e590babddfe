use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, RequestId, SubmissionDraft, SubmissionRequest};

enum EngineCommand {
    Dispatch {
        request: RequestId,
        draft: SubmissionDraft,
    },
}

/// Handle to the background submission worker. Cloning shares the same
/// worker; events are drained from whichever clone polls first.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let submitter = Arc::new(ReqwestSubmitter::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Queues one submission. Dispatches are independent: two calls mean two
    /// requests, with no deduplication here.
    pub fn dispatch(&self, request: RequestId, draft: SubmissionDraft) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch { request, draft });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Dispatch { request, draft } => {
            let result = match SubmissionRequest::from_draft(&draft) {
                Ok(submission) => submitter.submit(&submission).await,
                Err(err) => Err(err),
            };
            let _ = event_tx.send(EngineEvent::SubmissionSettled { request, result });
        }
    }
}
