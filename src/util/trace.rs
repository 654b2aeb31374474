//! Diagnostic tracing for the directory checker.
//!
//! Purely observational: a tracer never influences check results.

use crate::constants;

pub trait Tracer {
    fn debug(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn debug(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn debug(&self, message: &str) {
        log::debug!(target: constants::TRACE_TARGET, "{}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Tracer;
    use std::cell::RefCell;

    /// Collects messages for assertions.
    #[derive(Default)]
    pub struct RecordingTracer {
        pub messages: RefCell<Vec<String>>,
    }

    impl Tracer for RecordingTracer {
        fn debug(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }
}
