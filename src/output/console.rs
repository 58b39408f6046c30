use colored::*;
use std::io::Write;
use std::time::Duration;

use super::{progress_line, summary_line, OutputSink};
use crate::operation::Step;

const FALLBACK_WIDTH: usize = 40;

/// Writes to the process stdout/stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn terminal_width() -> usize {
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => cols as usize,
            _ => FALLBACK_WIDTH,
        }
    }
}

impl OutputSink for ConsoleSink {
    fn separator(&mut self) {
        println!("{}", "=".repeat(Self::terminal_width()));
    }

    fn step_started(&mut self, index: usize, step: &Step) {
        println!("{}", progress_line(index, step).bold());
    }

    fn stdout(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", text.trim_end_matches('\n'));
    }

    fn stderr(&mut self, text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{}", text.trim_end_matches('\n'));
    }

    fn summary(&mut self, steps: usize, elapsed: Duration) {
        println!("{}", summary_line(steps, elapsed).green());
    }
}
