//! Display side of the companion connection.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::ui::events::AppEvent;

use super::codec::{decode_line, encode_line};
use super::types::{CompanionMessage, CompanionRequest, ProtocolError};

/// The spawned companion process and its I/O threads.
pub struct CompanionLink {
    child: Child,
    requests: Sender<CompanionRequest>,
    reader_handle: Option<thread::JoinHandle<()>>,
}

impl CompanionLink {
    /// Spawn `program args...` and wire its stdout into `notifier`.
    pub fn spawn(
        program: &Path,
        args: &[String],
        notifier: Sender<AppEvent>,
    ) -> Result<Self, ProtocolError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(pid = child.id(), program = %program.display(), "companion spawned");

        let stdout = child.stdout.take().ok_or(ProtocolError::Disconnected)?;
        let stdin = child.stdin.take().ok_or(ProtocolError::Disconnected)?;

        let (requests, pending) = mpsc::channel();
        thread::spawn(move || {
            if let Err(err) = write_requests(stdin, pending) {
                tracing::warn!(error = %err, "companion request writer stopped");
            }
        });
        let reader_handle = thread::spawn(move || {
            read_messages(BufReader::new(stdout), &notifier);
        });

        Ok(Self {
            child,
            requests,
            reader_handle: Some(reader_handle),
        })
    }

    /// Sender for requests to the companion.
    pub fn requests(&self) -> Sender<CompanionRequest> {
        self.requests.clone()
    }

    /// Kill the companion and wait for its reader to drain.
    pub fn shutdown(&mut self) -> io::Result<()> {
        if let Err(err) = self.child.kill() {
            // Already exited.
            tracing::debug!(error = %err, "companion kill failed");
        }
        let status = self.child.wait()?;
        tracing::info!(%status, "companion exited");
        if let Some(handle) = self.reader_handle.take() {
            let _ = handle.join();
        }
        Ok(())
    }
}

/// Forward every well-formed line as [`AppEvent::Companion`].
///
/// Malformed lines are logged and skipped. End of stream is reported as
/// [`AppEvent::CompanionClosed`].
pub fn read_messages<R: BufRead>(reader: R, notifier: &Sender<AppEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "companion read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match decode_line::<CompanionMessage>(&line) {
            Ok(message) => {
                if notifier.send(AppEvent::Companion(message)).is_err() {
                    return;
                }
            }
            Err(err) => tracing::warn!(error = %err, line = %line, "rejected companion message"),
        }
    }
    let _ = notifier.send(AppEvent::CompanionClosed);
}

/// Write each request as one line until every sender is dropped.
pub fn write_requests<W: Write>(
    mut writer: W,
    pending: Receiver<CompanionRequest>,
) -> Result<(), ProtocolError> {
    for request in pending {
        tracing::debug!(?request, "sending request to companion");
        writer.write_all(encode_line(&request)?.as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}
