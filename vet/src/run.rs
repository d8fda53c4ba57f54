//! Per-run registration context.
//!
//! A [`ValidationRun`] is created fresh by each `validate()` call, handed to
//! the subject's `will_validate` hook, and discarded when the run ends. It
//! owns the run's pending list, so a discarded run's late settlements
//! cannot leak into a later run.

use std::future::Future;

use crate::host::ValidationHost;
use crate::outcome::{Outcome, OutcomeFuture, RuleError};
use crate::value::Value;

/// Registration context for one validation run.
pub struct ValidationRun<'h> {
    host: &'h dyn ValidationHost,
    pending: Vec<OutcomeFuture>,
}

impl<'h> ValidationRun<'h> {
    pub(crate) fn new(host: &'h dyn ValidationHost) -> Self {
        Self {
            host,
            pending: Vec::new(),
        }
    }

    /// Read a named property off the host.
    pub fn property(&self, name: &str) -> Value {
        self.host.property(name)
    }

    /// Register a synchronous check.
    ///
    /// The validator is invoked exactly once, immediately; the returned
    /// future settles when the handle is completed. Registration never
    /// blocks.
    pub fn validates<F>(&mut self, validator: F) -> OutcomeFuture
    where
        F: FnOnce(Outcome),
    {
        let future = Outcome::capture(validator);
        self.pending.push(future.clone());
        future
    }

    /// Register an asynchronous check.
    ///
    /// The body is driven as part of the run; a body that returns `Err`
    /// fails the check as a malfunction.
    pub fn validates_async<F, Fut>(&mut self, validator: F) -> OutcomeFuture
    where
        F: FnOnce(Outcome) -> Fut,
        Fut: Future<Output = Result<(), RuleError>> + Send + 'static,
    {
        let future = Outcome::capture_async(validator);
        self.pending.push(future.clone());
        future
    }

    /// Number of checks registered so far.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no checks have been registered.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn into_pending(self) -> Vec<OutcomeFuture> {
        self.pending
    }
}
