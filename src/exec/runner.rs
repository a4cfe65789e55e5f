//! Subprocess runner with stdout capture and optional timeout.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Executes a concrete argv and returns its captured standard output.
///
/// Returns `None` when the command could not produce output: it failed to
/// spawn, exited unsuccessfully, or was killed. Implementations never panic.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Option<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[String]) -> Option<String> {
        (**self).run(argv)
    }
}

/// Runs commands as local child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

const POLL_INTERVAL: Duration = Duration::from_millis(20);

impl ProcessRunner {
    /// A runner that waits for commands indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that kills commands still running after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String]) -> Option<String> {
        let Some((program, args)) = argv.split_first() else {
            warn!("refusing to run empty argv");
            return None;
        };

        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(%program, error = %e, "failed to spawn command");
                return None;
            }
        };

        // Drain both pipes on helper threads so a chatty child cannot block
        // on a full pipe while we poll for its exit.
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let started = Instant::now();
        let status = wait_with_timeout(&mut child, self.timeout);
        if matches!(status, WaitOutcome::TimedOut) {
            // A grandchild may still hold the pipes open; leave the readers detached.
            warn!(%program, timeout = ?self.timeout, "command timed out and was killed");
            return None;
        }
        let stdout = stdout.and_then(|h| h.join().ok()).unwrap_or_default();
        let stderr = stderr.and_then(|h| h.join().ok()).unwrap_or_default();

        match status {
            WaitOutcome::Exited(Some(0)) => {
                debug!(%program, elapsed = ?started.elapsed(), bytes = stdout.len(), "command finished");
                Some(stdout)
            }
            WaitOutcome::Exited(code) => {
                warn!(%program, ?code, stderr = %stderr.trim(), "command exited unsuccessfully");
                None
            }
            WaitOutcome::TimedOut => None,
            WaitOutcome::Failed(e) => {
                warn!(%program, error = %e, "failed to wait for command");
                None
            }
        }
    }
}

enum WaitOutcome {
    Exited(Option<i32>),
    TimedOut,
    Failed(std::io::Error),
}

fn spawn_reader<S: Read + Send + 'static>(mut stream: S) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> WaitOutcome {
    let Some(timeout) = timeout else {
        return match child.wait() {
            Ok(status) => WaitOutcome::Exited(status.code()),
            Err(e) => WaitOutcome::Failed(e),
        };
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return WaitOutcome::Exited(status.code()),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // SIGKILL on Unix, TerminateProcess on Windows.
                    let _ = child.kill();
                    let _ = child.wait();
                    return WaitOutcome::TimedOut;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return WaitOutcome::Failed(e),
        }
    }
}
