//! Boot Module
//!
//! The scripted intro played before the terminal accepts input.

pub mod runner;
pub mod script;
pub mod sequencer;

pub use runner::{spawn_boot, spawn_boot_with, BootEvent, BootHandle, BootTask};
pub use script::BootScript;
pub use sequencer::{BootPhase, BootSequencer, BootStep};
