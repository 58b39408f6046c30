use std::time::Duration;

/// Summary of one operation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionReport {
    pub steps: usize,
    pub elapsed: Duration,
    /// Identifiers of failed steps, in declaration order.
    pub failed_steps: Vec<String>,
}

impl ExecutionReport {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn succeeded(&self) -> bool {
        self.failed_steps.is_empty()
    }
}
