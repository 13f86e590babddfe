use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use courier_core::{Effect, Msg, RequestId, SubmissionOutcome};
use courier_engine::{
    EngineEvent, EngineHandle, SubmissionDraft, SubmitError, SubmitFailureKind, SubmitSettings,
};
use courier_logging::{courier_info, courier_warn};

use super::app::ShellEvent;

/// Executes core effects against the engine and feeds completions back into
/// the shell loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings, event_tx: mpsc::Sender<ShellEvent>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendSubmission {
                    request,
                    title,
                    author,
                    file_path,
                } => {
                    courier_info!(
                        "SendSubmission request={} title_len={} author_len={} file={:?}",
                        request,
                        title.len(),
                        author.len(),
                        file_path
                    );
                    self.engine.dispatch(
                        request,
                        SubmissionDraft {
                            title,
                            author,
                            file_path,
                        },
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<ShellEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::SubmissionSettled { request, result } => {
                        let outcome = match result {
                            Ok(receipt) => {
                                courier_info!(
                                    "Submission {} delivered, status={}",
                                    request,
                                    receipt.status
                                );
                                SubmissionOutcome::Delivered {
                                    message: receipt.message,
                                }
                            }
                            Err(err) => failure_outcome(request, &err),
                        };
                        let _ = event_tx.send(ShellEvent::Core(Msg::SubmissionSettled {
                            request,
                            outcome,
                        }));
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// Maps an engine failure to a display outcome, logging the detail that the
/// generic display strings drop.
fn failure_outcome(request: RequestId, err: &SubmitError) -> SubmissionOutcome {
    match &err.kind {
        SubmitFailureKind::Rejected { status } => {
            courier_warn!(
                "Submission {} rejected by the endpoint, status={}",
                request,
                status
            );
            SubmissionOutcome::Rejected
        }
        _ => {
            courier_warn!("Submission {} failed: {}", request, err);
            SubmissionOutcome::TransportFailed
        }
    }
}
