//! Outcome adapter: wraps one validator invocation into a settlement that
//! resolves exactly once.
//!
//! A validator receives an [`Outcome`] handle and settles it by calling
//! `valid()`, `invalid()`, or `invalid_on()`. `error()` fails the pending
//! computation instead, signalling a defect in the check itself rather than
//! a failed business rule. Only the first completion counts.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use thiserror::Error;
use tokio::sync::oneshot;

/// Error type for a malfunctioning check.
///
/// Distinct from an invalid settlement: a `RuleError` aborts the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RuleError {
    /// Error message.
    pub message: String,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for RuleError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for RuleError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<std::io::Error> for RuleError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// The normalized result of one check.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The check passed.
    Valid,
    /// The check failed a business rule.
    Invalid {
        /// Property the failure concerns, `None` for subject-wide failures.
        property: Option<String>,
        /// Resolved message text.
        message: String,
    },
}

impl Settlement {
    /// Check if this settlement is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// A pending settlement, cloneable so both the registering caller and the
/// coordinator can await the same check.
pub type OutcomeFuture = Shared<BoxFuture<'static, Result<Settlement, RuleError>>>;

/// Single-assignment settlement handle passed to validators.
///
/// Cloneable; all clones share the same underlying channel. Completing a
/// second time is a no-op.
pub struct Outcome {
    tx: Arc<Mutex<Option<oneshot::Sender<Result<Settlement, RuleError>>>>>,
    settled: Arc<AtomicBool>,
}

impl Outcome {
    fn pair() -> (Self, oneshot::Receiver<Result<Settlement, RuleError>>) {
        let (tx, rx) = oneshot::channel();
        let outcome = Self {
            tx: Arc::new(Mutex::new(Some(tx))),
            settled: Arc::new(AtomicBool::new(false)),
        };
        (outcome, rx)
    }

    /// Create a bare handle/future pair.
    pub fn channel() -> (Self, OutcomeFuture) {
        let (outcome, rx) = Self::pair();
        let future: BoxFuture<'static, _> = Box::pin(Self::receive(rx));
        (outcome, future.shared())
    }

    /// Invoke a synchronous validator exactly once and return its pending
    /// settlement.
    ///
    /// A validator that returns without settling and without stashing a
    /// clone of the handle drops the channel; the settlement then fails
    /// with a [`RuleError`] naming the defect.
    pub fn capture<F>(validator: F) -> OutcomeFuture
    where
        F: FnOnce(Outcome),
    {
        let (outcome, rx) = Self::pair();
        validator(outcome);
        let future: BoxFuture<'static, _> = Box::pin(Self::receive(rx));
        future.shared()
    }

    /// Invoke an asynchronous validator exactly once and return its pending
    /// settlement.
    ///
    /// The validator body is driven by the adapter; a body that returns
    /// `Err` is treated exactly as calling [`Outcome::error`].
    pub fn capture_async<F, Fut>(validator: F) -> OutcomeFuture
    where
        F: FnOnce(Outcome) -> Fut,
        Fut: Future<Output = Result<(), RuleError>> + Send + 'static,
    {
        let (outcome, rx) = Self::pair();
        let handle = outcome.clone();
        let body = validator(outcome);
        let future: BoxFuture<'static, _> = Box::pin(async move {
            if let Err(e) = body.await {
                handle.error(e);
            }
            drop(handle);
            Self::receive(rx).await
        });
        future.shared()
    }

    async fn receive(
        rx: oneshot::Receiver<Result<Settlement, RuleError>>,
    ) -> Result<Settlement, RuleError> {
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(RuleError::new(
                "validator dropped its outcome handle without settling",
            )),
        }
    }

    /// Settle the check as valid.
    pub fn valid(&self) {
        self.complete(Ok(Settlement::Valid));
    }

    /// Settle the check as invalid with a subject-wide message.
    pub fn invalid(&self, message: impl Into<String>) {
        self.complete(Ok(Settlement::Invalid {
            property: None,
            message: message.into(),
        }));
    }

    /// Settle the check as invalid for one property.
    pub fn invalid_on(&self, property: impl Into<String>, message: impl Into<String>) {
        self.complete(Ok(Settlement::Invalid {
            property: Some(property.into()),
            message: message.into(),
        }));
    }

    /// Fail the check with an unexpected error.
    pub fn error(&self, err: impl Into<RuleError>) {
        self.complete(Err(err.into()));
    }

    /// Check if the handle has already been completed.
    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::SeqCst)
    }

    fn complete(&self, result: Result<Settlement, RuleError>) {
        if let Some(tx) = self.tx.lock().unwrap_or_else(|e| e.into_inner()).take() {
            let _ = tx.send(result);
            self.settled.store(true, Ordering::SeqCst);
        }
    }
}

impl Clone for Outcome {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            settled: Arc::clone(&self.settled),
        }
    }
}
