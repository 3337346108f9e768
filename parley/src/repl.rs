//! Line-oriented front end: each input line is a prompt or a `/` command.
//!
//! Status changes are written by a printer task that follows the session's
//! watch channel. When input ends, in-flight submissions are awaited so their
//! results still reach the output; `/quit` leaves without waiting.

use std::sync::Arc;

use psession::{RequestStatus, SessionState, SubmitHandle, SummarizationSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{Mutex, oneshot, watch};
use tokio::task::JoinHandle;

use crate::render::{HELP, render_providers, render_status};
use crate::{Command, ParleyError, parse_command};

type SharedOutput<W> = Arc<Mutex<W>>;

/// Runs the prompt loop until `input` is exhausted or `/quit` is read.
pub async fn run_repl<R, W>(
    session: &SummarizationSession,
    input: R,
    output: W,
) -> Result<(), ParleyError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let output = Arc::new(Mutex::new(output));
    let mut receiver = session.subscribe();
    let initial = receiver.borrow_and_update().clone();
    write_line(
        &output,
        &render_providers(session.registry(), initial.selected_provider),
    )
    .await?;
    write_line(&output, &render_status(&initial)).await?;

    let (stop, stopped) = oneshot::channel();
    let tracker = StatusTracker::new(&initial);
    let printer = spawn_printer(receiver, Arc::clone(&output), tracker, stopped);

    let mut in_flight: Vec<SubmitHandle> = Vec::new();
    let mut quit = false;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Prompt(text)) => {
                in_flight.retain(|handle| !handle.is_finished());
                in_flight.extend(session.submit(text));
            }
            Ok(Command::SelectProvider(provider)) => {
                session.select_provider(provider);
                let confirmation = format!("Selected {}.", provider.display_name());
                write_line(&output, &confirmation).await?;
            }
            Ok(Command::ListProviders) => {
                let selected = session.state().selected_provider;
                write_line(&output, &render_providers(session.registry(), selected)).await?;
            }
            Ok(Command::Help) => write_line(&output, HELP).await?,
            Ok(Command::Quit) => {
                quit = true;
                break;
            }
            Ok(Command::Empty) => {}
            Err(error) => write_line(&output, &error.to_string()).await?,
        }
    }

    if quit {
        printer.abort();
        return Ok(());
    }

    tracing::debug!(in_flight = in_flight.len(), "input closed; waiting for submissions");
    for handle in in_flight {
        handle.wait().await?;
    }

    let _ = stop.send(());
    printer.await.map_err(psession::SessionError::from)??;
    Ok(())
}

fn spawn_printer<W>(
    mut receiver: watch::Receiver<SessionState>,
    output: SharedOutput<W>,
    mut tracker: StatusTracker,
    mut stopped: oneshot::Receiver<()>,
) -> JoinHandle<std::io::Result<()>>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            let stopping = tokio::select! {
                changed = receiver.changed() => {
                    if changed.is_err() {
                        return Ok(());
                    }
                    false
                }
                _ = &mut stopped => true,
            };

            // On stop this also picks up a state published after the last wakeup.
            let state = receiver.borrow_and_update().clone();
            if tracker.observe(&state) {
                write_line(&output, &render_status(&state)).await?;
            }

            if stopping {
                return Ok(());
            }
        }
    })
}

async fn write_line<W>(output: &SharedOutput<W>, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut output = output.lock().await;
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

/// Decides which published states are worth a line of output.
///
/// A state is new when its submission ticket or its status differs from the
/// last one shown; provider selection alone prints nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusTracker {
    ticket: u64,
    status: RequestStatus,
}

impl StatusTracker {
    fn new(state: &SessionState) -> Self {
        Self {
            ticket: state.ticket,
            status: state.status.clone(),
        }
    }

    fn observe(&mut self, state: &SessionState) -> bool {
        if state.ticket == self.ticket && state.status == self.status {
            return false;
        }

        self.ticket = state.ticket;
        self.status = state.status.clone();
        true
    }
}
