use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use courier_core::{update, AppState, Msg};
use courier_logging::{courier_info, courier_warn};

use super::config::{self, ConfigSource};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::LineCommand;
use super::ui::{input, render};

/// Events feeding the shell's single dispatch loop.
pub(crate) enum ShellEvent {
    /// A raw line typed into the form.
    Line(String),
    /// A message produced outside the shell (engine completions).
    Core(Msg),
    /// Stdin reached end of input; the shell should wind down.
    StdinClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let loaded = config::load();
    logging::initialize(loaded.config.log);
    match &loaded.source {
        ConfigSource::File(path) => courier_info!("Loaded config from {:?}", path),
        ConfigSource::Defaults => courier_info!("No config file found; using defaults"),
        ConfigSource::DefaultsAfterError(path, note) => {
            courier_warn!("Ignoring config at {:?}: {}", path, note);
        }
    }
    courier_info!("Submission endpoint: {}", loaded.config.endpoint);

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let settings = loaded.config.submit_settings();
    // The wait on exit is bounded by one request timeout, plus slack for
    // file loading and thread scheduling.
    let settle_grace = settings.request_timeout + Duration::from_secs(1);
    let runner = EffectRunner::new(settings, event_tx.clone());
    spawn_stdin_reader(event_tx);

    let mut state = AppState::new();
    let mut stdout = io::stdout();
    write!(stdout, "{}", render::welcome(&state.view()))?;
    stdout.flush()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Line(line) => match input::parse_line(&line) {
                LineCommand::Title(text) => {
                    dispatch(&mut state, Msg::TitleChanged(text), &runner, &mut stdout)?;
                }
                LineCommand::Author(text) => {
                    dispatch(&mut state, Msg::AuthorChanged(text), &runner, &mut stdout)?;
                }
                LineCommand::File(path) => {
                    dispatch(&mut state, Msg::FileChosen(path), &runner, &mut stdout)?;
                }
                LineCommand::Submit => {
                    dispatch(&mut state, Msg::SubmitPressed, &runner, &mut stdout)?;
                }
                LineCommand::Help => {
                    write!(stdout, "{}", render::help())?;
                    stdout.flush()?;
                }
                LineCommand::Quit => {
                    settle_before_exit(&mut state, &event_rx, &runner, &mut stdout, settle_grace)?;
                    break;
                }
                LineCommand::Empty => {}
                LineCommand::Unknown(word) => {
                    write!(stdout, "{}", render::unknown_hint(&word))?;
                    stdout.flush()?;
                }
            },
            ShellEvent::Core(msg) => dispatch(&mut state, msg, &runner, &mut stdout)?,
            ShellEvent::StdinClosed => {
                settle_before_exit(&mut state, &event_rx, &runner, &mut stdout, settle_grace)?;
                break;
            }
        }
    }

    courier_info!("Shutting down");
    Ok(())
}

/// Runs one message through the pure core, executes any effects, and
/// re-renders when the state marked itself dirty.
fn dispatch(
    state: &mut AppState,
    msg: Msg,
    runner: &EffectRunner,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        write!(stdout, "{}", render::render(&next.view()))?;
        stdout.flush()?;
    }
    *state = next;
    Ok(())
}

/// Holds the shell open until an in-flight submission settles, so scripted
/// input that submits and immediately quits still sends its request and
/// shows the outcome. The wait is bounded by `grace`; a request that
/// outlives it is abandoned.
fn settle_before_exit(
    state: &mut AppState,
    event_rx: &mpsc::Receiver<ShellEvent>,
    runner: &EffectRunner,
    stdout: &mut impl Write,
    grace: Duration,
) -> anyhow::Result<()> {
    if state.view().submit_enabled {
        return Ok(());
    }
    courier_info!("Waiting for the in-flight submission before exit");

    let deadline = Instant::now() + grace;
    while !state.view().submit_enabled {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            courier_warn!("Exiting with the submission still unsettled");
            break;
        }
        match event_rx.recv_timeout(remaining) {
            // Only engine completions count now; lines typed after the quit
            // are dropped.
            Ok(ShellEvent::Core(msg)) => dispatch(state, msg, runner, stdout)?,
            Ok(_) => {}
            Err(_) => {
                courier_warn!("Exiting with the submission still unsettled");
                break;
            }
        }
    }
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => ShellEvent::Line(line),
                Err(_) => break,
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(ShellEvent::StdinClosed);
    });
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use courier_core::{update, AppState, Msg, SubmissionOutcome, MSG_REJECTED_RETRY};
    use courier_engine::SubmitSettings;

    use super::{settle_before_exit, ShellEvent};
    use crate::platform::effects::EffectRunner;

    fn submitting_state() -> AppState {
        let state = AppState::new();
        let (state, _) = update(state, Msg::TitleChanged("Berth schedule".to_string()));
        let (mut state, effects) = update(state, Msg::SubmitPressed);
        assert_eq!(effects.len(), 1);
        state.consume_dirty();
        state
    }

    fn shell_channel() -> (EffectRunner, mpsc::Sender<ShellEvent>, mpsc::Receiver<ShellEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let runner = EffectRunner::new(SubmitSettings::default(), event_tx.clone());
        (runner, event_tx, event_rx)
    }

    #[test]
    fn exit_waits_for_the_pending_settle_and_renders_it() {
        let (runner, event_tx, event_rx) = shell_channel();
        let mut state = submitting_state();
        event_tx
            .send(ShellEvent::Core(Msg::SubmissionSettled {
                request: 1,
                outcome: SubmissionOutcome::Delivered {
                    message: "filed".to_string(),
                },
            }))
            .expect("send settle");

        let mut out = Vec::new();
        settle_before_exit(&mut state, &event_rx, &runner, &mut out, Duration::from_secs(5))
            .expect("wind down");

        assert!(state.view().submit_enabled);
        assert_eq!(state.view().status, "filed");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("status: filed"));
    }

    #[test]
    fn exit_stops_waiting_once_the_grace_period_passes() {
        let (runner, _event_tx, event_rx) = shell_channel();
        let mut state = submitting_state();

        let mut out = Vec::new();
        settle_before_exit(&mut state, &event_rx, &runner, &mut out, Duration::from_millis(40))
            .expect("wind down");

        assert!(!state.view().submit_enabled);
        assert!(out.is_empty());
    }

    #[test]
    fn lines_arriving_during_the_wind_down_are_dropped() {
        let (runner, event_tx, event_rx) = shell_channel();
        let mut state = submitting_state();
        event_tx
            .send(ShellEvent::Line("title overwritten".to_string()))
            .expect("send line");
        event_tx
            .send(ShellEvent::Core(Msg::SubmissionSettled {
                request: 1,
                outcome: SubmissionOutcome::Rejected,
            }))
            .expect("send settle");

        let mut out = Vec::new();
        settle_before_exit(&mut state, &event_rx, &runner, &mut out, Duration::from_secs(5))
            .expect("wind down");

        assert_eq!(state.view().title, "Berth schedule");
        assert_eq!(state.view().status, MSG_REJECTED_RETRY);
    }

    #[test]
    fn an_idle_exit_does_not_wait() {
        let (runner, _event_tx, event_rx) = shell_channel();
        let mut state = AppState::new();

        let started = std::time::Instant::now();
        let mut out = Vec::new();
        settle_before_exit(&mut state, &event_rx, &runner, &mut out, Duration::from_secs(5))
            .expect("wind down");

        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(out.is_empty());
    }
}
