//! Boot Runner
//!
//! Drives a `BootSequencer` from a tokio task: one recurring interval for
//! the line reveals, then a single settle delay. The task is owned by a
//! guard that aborts it on drop, so tearing the view down mid-sequence
//! releases the timer.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::interpreter::History;

use super::script::BootScript;
use super::sequencer::{BootPhase, BootSequencer, BootStep};

/// Progress reported by the boot task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootEvent {
    Line(String),
    /// Boot finished; carries the interpreter's initial history
    Complete(History),
}

/// Owns the boot task; aborting it when dropped.
pub struct BootTask {
    task: JoinHandle<()>,
}

impl Drop for BootTask {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the boot task, reporting to `events`. Must be called within a
/// tokio runtime.
pub fn spawn_boot_with(script: BootScript, events: mpsc::UnboundedSender<BootEvent>) -> BootTask {
    BootTask {
        task: tokio::spawn(run(BootSequencer::new(script), events)),
    }
}

/// Spawn the boot task with its own event channel.
pub fn spawn_boot(script: BootScript) -> BootHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    BootHandle {
        events: rx,
        _task: spawn_boot_with(script, tx),
    }
}

async fn run(mut seq: BootSequencer, events: mpsc::UnboundedSender<BootEvent>) {
    debug!("boot: {} line(s)", seq.script().len());

    // A zero interval period panics.
    let tick = seq.script().tick.max(Duration::from_millis(1));
    let mut interval = time::interval_at(Instant::now() + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while seq.phase() == BootPhase::Revealing {
        interval.tick().await;
        if let Some(BootStep::Reveal { line, .. }) = seq.advance() {
            if events.send(BootEvent::Line(line)).is_err() {
                return;
            }
        }
    }

    if let Some(settle) = seq.next_delay() {
        time::sleep(settle).await;
    }
    seq.advance();
    let _ = events.send(BootEvent::Complete(seq.into_history()));
}

/// Receiving end of a running boot sequence.
pub struct BootHandle {
    events: mpsc::UnboundedReceiver<BootEvent>,
    _task: BootTask,
}

impl BootHandle {
    pub async fn next_event(&mut self) -> Option<BootEvent> {
        self.events.recv().await
    }

    /// Wait for the sequence to finish, passing each revealed line to
    /// `on_line`. Returns the seed history.
    pub async fn wait<F: FnMut(&str)>(mut self, mut on_line: F) -> History {
        while let Some(event) = self.next_event().await {
            match event {
                BootEvent::Line(line) => on_line(&line),
                BootEvent::Complete(history) => return history,
            }
        }
        History::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
