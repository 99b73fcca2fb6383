//! A terminal spinner that follows the console's loading state.
//!
//! The spinner subscribes to the console [`EventBus`](crate::events::EventBus)
//! and spins from [`Event::SubmitStarted`] until [`Event::SubmitResolved`].
//! It writes to stderr so it doesn't interfere with review output on stdout.

use std::io::Write;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::events::Event;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

fn frame(i: usize) -> &'static str {
    FRAMES[i % FRAMES.len()]
}

/// A spinner running in a background task for as long as it is attached.
pub struct Spinner {
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Attach to a console's event stream with the given message
    /// (e.g. `"Analyzing..."`).
    pub fn attach(events: broadcast::Receiver<Event>, message: &str) -> Self {
        let message = message.to_string();
        let handle = tokio::spawn(run(events, message));
        Self { handle }
    }

    /// Stop following events and clear the spinner line.
    pub async fn detach(self) {
        self.handle.abort();
        let _ = self.handle.await;
        eprint!("\x1b[2K\r");
        let _ = std::io::stderr().flush();
    }
}

async fn run(mut events: broadcast::Receiver<Event>, message: String) {
    loop {
        // Idle: wait for a submission to start.
        match events.recv().await {
            Ok(Event::SubmitStarted { .. }) => {}
            Ok(_) | Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => return,
        }

        let mut i = 0;
        let closed = loop {
            // \r moves to start of line, \x1b[2K clears the line
            eprint!("\x1b[2K\r{} {message}", frame(i));
            let _ = std::io::stderr().flush();

            tokio::select! {
                _ = tokio::time::sleep(INTERVAL) => {}
                event = events.recv() => match event {
                    Ok(Event::SubmitResolved { .. }) => break false,
                    Err(RecvError::Closed) => break true,
                    _ => {}
                },
            }
            i += 1;
        };

        eprint!("\x1b[2K\r");
        let _ = std::io::stderr().flush();

        if closed {
            return;
        }
    }
}
