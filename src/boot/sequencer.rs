//! Boot Sequencer
//!
//! Synchronous state machine behind the intro animation. Each `advance`
//! corresponds to one timer firing: first one per script line, then the
//! final settle delay.

use std::time::Duration;

use log::trace;

use crate::interpreter::History;

use super::script::BootScript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Lines are still being revealed, one per tick
    Revealing,
    /// All lines shown, waiting out the settle delay
    Settling,
    /// Interactive; input may be accepted
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootStep {
    Reveal { index: usize, line: String },
    Complete,
}

#[derive(Debug, Clone)]
pub struct BootSequencer {
    script: BootScript,
    revealed: usize,
    phase: BootPhase,
}

impl BootSequencer {
    pub fn new(script: BootScript) -> Self {
        let phase = if script.is_empty() {
            BootPhase::Settling
        } else {
            BootPhase::Revealing
        };
        Self { script, revealed: 0, phase }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }

    /// Lines visible so far, in order.
    pub fn revealed(&self) -> &[String] {
        &self.script.lines[..self.revealed]
    }

    /// Delay before the next step, `None` once complete.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            BootPhase::Revealing => Some(self.script.tick),
            BootPhase::Settling => Some(self.script.settle),
            BootPhase::Complete => None,
        }
    }

    /// Take the next step. Returns `None` once complete.
    pub fn advance(&mut self) -> Option<BootStep> {
        match self.phase {
            BootPhase::Revealing => {
                let index = self.revealed;
                let line = self.script.lines[index].clone();
                self.revealed += 1;
                if self.revealed == self.script.len() {
                    self.phase = BootPhase::Settling;
                }
                trace!("boot: reveal line {}", index);
                Some(BootStep::Reveal { index, line })
            }
            BootPhase::Settling => {
                self.phase = BootPhase::Complete;
                trace!("boot: complete");
                Some(BootStep::Complete)
            }
            BootPhase::Complete => None,
        }
    }

    /// The history the interpreter starts with: every revealed line.
    pub fn into_history(self) -> History {
        let mut lines = self.script.lines;
        lines.truncate(self.revealed);
        History::from_lines(lines)
    }

    pub fn script(&self) -> &BootScript {
        &self.script
    }
}
