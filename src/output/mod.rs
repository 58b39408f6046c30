//! Presentation of an operation run.
//!
//! The engine reports progress through [`OutputSink`]; the CLI prints with
//! [`ConsoleSink`] and tests capture with [`BufferSink`].

mod buffer;
mod console;

pub use buffer::{BufferSink, SinkEvent};
pub use console::ConsoleSink;

use crate::operation::Step;
use std::time::Duration;

pub trait OutputSink: Send {
    /// Visual line framing a run.
    fn separator(&mut self);

    /// Progress line for a step about to run. `index` is 1-based.
    fn step_started(&mut self, index: usize, step: &Step);

    /// Captured standard output of a finished step.
    fn stdout(&mut self, text: &str);

    /// Captured standard error of a finished step.
    fn stderr(&mut self, text: &str);

    /// Final status line of a successful run.
    fn summary(&mut self, steps: usize, elapsed: Duration);
}

/// `[<index>] <command> <args>`
pub fn progress_line(index: usize, step: &Step) -> String {
    format!("[{}] {}", index, step.identifier())
}

pub fn summary_line(steps: usize, elapsed: Duration) -> String {
    format!("Ran {} tasks in {} ms", steps, elapsed.as_millis())
}
