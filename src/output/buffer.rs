use std::time::Duration;

use super::{progress_line, summary_line, OutputSink};
use crate::operation::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Separator,
    Progress(String),
    Stdout(String),
    Stderr(String),
    Summary(String),
}

/// Records every event in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    events: Vec<SinkEvent>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn progress_lines(&self) -> Vec<&str> {
        self.collect(|event| match event {
            SinkEvent::Progress(line) => Some(line),
            _ => None,
        })
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.collect(|event| match event {
            SinkEvent::Stdout(line) => Some(line),
            _ => None,
        })
    }

    pub fn stderr_lines(&self) -> Vec<&str> {
        self.collect(|event| match event {
            SinkEvent::Stderr(line) => Some(line),
            _ => None,
        })
    }

    pub fn summary(&self) -> Option<&str> {
        self.collect(|event| match event {
            SinkEvent::Summary(line) => Some(line),
            _ => None,
        })
        .pop()
    }

    fn collect<'a, F>(&'a self, pick: F) -> Vec<&'a str>
    where
        F: Fn(&'a SinkEvent) -> Option<&'a String>,
    {
        self.events
            .iter()
            .filter_map(pick)
            .map(String::as_str)
            .collect()
    }
}

impl OutputSink for BufferSink {
    fn separator(&mut self) {
        self.events.push(SinkEvent::Separator);
    }

    fn step_started(&mut self, index: usize, step: &Step) {
        self.events.push(SinkEvent::Progress(progress_line(index, step)));
    }

    fn stdout(&mut self, text: &str) {
        self.events.push(SinkEvent::Stdout(text.to_string()));
    }

    fn stderr(&mut self, text: &str) {
        self.events.push(SinkEvent::Stderr(text.to_string()));
    }

    fn summary(&mut self, steps: usize, elapsed: Duration) {
        self.events.push(SinkEvent::Summary(summary_line(steps, elapsed)));
    }
}
