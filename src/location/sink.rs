use std::cell::RefCell;
use std::error::Error;

/// Destination for non-fatal normalization failures
///
/// Implementations receive the name of the failing operation and the error
/// that caused a candidate link to be dropped. Reporting never affects the
/// outcome: the link is skipped either way.
pub trait ErrorSink {
    fn report(&self, operation: &str, error: &dyn Error);
}

/// Reports failures through `tracing` at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, operation: &str, error: &dyn Error) {
        tracing::error!("{}: {}", operation, error);
    }
}

/// Keeps every reported failure in memory as `(operation, message)` pairs
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: RefCell<Vec<(String, String)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, operation: &str, error: &dyn Error) {
        self.reports
            .borrow_mut()
            .push((operation.to_string(), error.to_string()));
    }
}
