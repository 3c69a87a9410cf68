//! Line-oriented interactive session.
//!
//! The loop owns the `Session` and is its only writer. Lookups run on
//! spawned tasks and come back as `QueryCompleted` events over a channel.

pub mod input;
pub mod render;

use dnslook_application::session::{Focus, PendingQuery, Session, SessionEvent, Transition};
use dnslook_application::use_cases::LookupRecordsUseCase;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub async fn run(mut session: Session, lookup: Arc<LookupRecordsUseCase>) -> anyhow::Result<()> {
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<SessionEvent>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    draw(&session)?;

    loop {
        let events = tokio::select! {
            line = lines.next_line(), if input_open => {
                match read_events(line, session.snapshot().focus) {
                    LineInput::Events(events) => events,
                    LineInput::Closed => {
                        input_open = false;
                        Vec::new()
                    }
                }
            }
            Some(event) = completion_rx.recv() => vec![event],
        };

        let mut needs_render = false;
        for event in events {
            let transition = session.handle(event, Instant::now());
            needs_render |= transition.needs_render();

            match transition {
                Transition::Dispatch(pending) => {
                    spawn_lookup(pending, Arc::clone(&lookup), completion_tx.clone())
                }
                Transition::Quit => {
                    info!("Session ended");
                    return Ok(());
                }
                Transition::Ignored | Transition::Updated => {}
            }
        }

        if needs_render {
            draw(&session)?;
        }

        // Without input only an in-flight answer is still worth waiting for.
        if !input_open && !session.snapshot().is_loading() {
            return Ok(());
        }
    }
}

enum LineInput {
    Events(Vec<SessionEvent>),
    Closed,
}

/// Turns one stdin read into events. A line that is not valid UTF-8 is
/// dropped and reading continues; any other read error closes input.
fn read_events(line: io::Result<Option<String>>, focus: Focus) -> LineInput {
    match line {
        Ok(Some(line)) => LineInput::Events(input::parse_line(&line, focus)),
        Ok(None) => {
            debug!("Input closed");
            LineInput::Closed
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!(error = %e, "Ignoring unreadable input line");
            LineInput::Events(Vec::new())
        }
        Err(e) => {
            warn!(error = %e, "Input failed, no longer reading");
            LineInput::Closed
        }
    }
}

fn spawn_lookup(
    pending: PendingQuery,
    lookup: Arc<LookupRecordsUseCase>,
    completion_tx: mpsc::UnboundedSender<SessionEvent>,
) {
    let PendingQuery { ticket, request } = pending;

    tokio::spawn(async move {
        let result = lookup.execute(request).await;
        if completion_tx
            .send(SessionEvent::QueryCompleted { ticket, result })
            .is_err()
        {
            debug!(ticket = %ticket, "Session gone before lookup completed");
        }
    });
}

fn draw(session: &Session) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render::render(session))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_input() {
        let mut lines = BufReader::new(&b"\xff\xfe\n:tab\n"[..]).lines();

        let first = read_events(lines.next_line().await, Focus::Domain);
        assert!(matches!(first, LineInput::Events(ref events) if events.is_empty()));

        let second = read_events(lines.next_line().await, Focus::Domain);
        assert!(matches!(
            second,
            LineInput::Events(ref events) if matches!(events[..], [SessionEvent::SwitchFocus])
        ));

        let end = read_events(lines.next_line().await, Focus::Domain);
        assert!(matches!(end, LineInput::Closed));
    }

    #[test]
    fn test_other_read_errors_close_input() {
        let error = io::Error::from(io::ErrorKind::BrokenPipe);

        assert!(matches!(
            read_events(Err(error), Focus::Domain),
            LineInput::Closed
        ));
    }
}
