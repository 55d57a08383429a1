//! Child-process plumbing for a UCI engine.
//!
//! A dedicated reader thread forwards engine stdout lines over a channel so
//! reads can carry a timeout; a stuck or dead engine surfaces as
//! [`ArbiterError::EngineUnavailable`] instead of blocking the turn forever.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use arbiter_core::ArbiterError;

pub struct EngineProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    lines: Receiver<String>,
}

impl EngineProcess {
    /// Spawn the engine binary with piped stdio.
    pub fn spawn(binary: &str) -> Result<Self, ArbiterError> {
        let mut child = Command::new(binary)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ArbiterError::EngineUnavailable(format!("failed to start '{}': {}", binary, e))
            })?;

        let stdin = BufWriter::new(child.stdin.take().ok_or_else(|| {
            ArbiterError::EngineUnavailable(format!("no stdin handle for '{}'", binary))
        })?);
        let stdout = child.stdout.take().ok_or_else(|| {
            ArbiterError::EngineUnavailable(format!("no stdout handle for '{}'", binary))
        })?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines() {
                let Ok(line) = line else { break };
                // The receiver hanging up means the evaluator was dropped.
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            child,
            stdin,
            lines: rx,
        })
    }

    /// Send one protocol line.
    pub fn send(&mut self, command: &str) -> Result<(), ArbiterError> {
        writeln!(self.stdin, "{command}")
            .and_then(|_| self.stdin.flush())
            .map_err(|e| ArbiterError::EngineUnavailable(format!("write failed: {}", e)))
    }

    /// Receive the next stdout line, waiting at most `timeout`.
    pub fn recv(&mut self, timeout: Duration) -> Result<String, ArbiterError> {
        match self.lines.recv_timeout(timeout) {
            Ok(line) => Ok(line),
            Err(RecvTimeoutError::Timeout) => Err(ArbiterError::EngineUnavailable(format!(
                "engine did not respond within {:?}",
                timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => Err(ArbiterError::EngineUnavailable(
                "engine process exited".to_string(),
            )),
        }
    }

    /// Discard lines until one equals `token` (trimmed), within `timeout`
    /// overall. Used for the `uciok`/`readyok` handshakes.
    pub fn wait_for(&mut self, token: &str, timeout: Duration) -> Result<(), ArbiterError> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .ok_or_else(|| {
                    ArbiterError::EngineUnavailable(format!(
                        "timed out waiting for '{}'",
                        token
                    ))
                })?;
            if self.recv(remaining)?.trim() == token {
                return Ok(());
            }
        }
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.child.wait();
    }
}
