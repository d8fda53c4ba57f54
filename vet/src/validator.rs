//! Per-subject validation coordinator.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::future::try_join_all;
use thiserror::Error;

use crate::errors::{ErrorCollection, ValidationError};
use crate::host::Validatable;
use crate::outcome::{RuleError, Settlement};
use crate::run::ValidationRun;

/// Error type for a validation run that could not complete.
///
/// A rejected run is indeterminate, not invalid: no validity value was
/// produced.
#[derive(Debug, Clone, Error)]
pub enum RunError {
    /// A run is already in flight for this subject.
    #[error("a validation run is already in flight")]
    AlreadyValidating,

    /// A rule malfunctioned, aborting the run.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// The state of a subject's validation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run has settled yet, or validations were cleared.
    #[default]
    Idle,
    /// A run is in flight.
    Validating,
    /// The last run settled with no errors.
    SettledValid,
    /// The last run settled with errors.
    SettledInvalid,
}

impl RunState {
    /// Check if no run has settled.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if a run is in flight.
    pub fn is_validating(&self) -> bool {
        matches!(self, Self::Validating)
    }

    /// Check if the last run settled, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::SettledValid | Self::SettledInvalid)
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: RunState,
    errors: ErrorCollection,
}

/// Subject-scoped validation coordinator with interior mutability.
///
/// `Validator` wraps the subject's last completed run state behind an
/// `Arc<RwLock>`, making it cheap to clone: display collaborators hold
/// clones and read flags and error snapshots while a run is in flight.
///
/// Run-scoped bookkeeping (the pending list) lives on [`ValidationRun`],
/// created fresh by every [`Validator::validate`] call, so overlapping
/// `clear_validations()` calls and late settlements from a discarded run
/// cannot corrupt a later run.
#[derive(Debug, Default)]
pub struct Validator {
    inner: Arc<RwLock<Inner>>,
}

impl Validator {
    /// Create a coordinator in the idle state with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.read().state
    }

    /// Check if a run is in flight.
    pub fn is_validating(&self) -> bool {
        self.read().state.is_validating()
    }

    /// Check if the subject is valid: the error collection is empty.
    pub fn is_valid(&self) -> bool {
        self.read().errors.is_empty()
    }

    /// Check if the subject has any errors.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get a snapshot of the current error collection.
    pub fn errors(&self) -> ErrorCollection {
        self.read().errors.clone()
    }

    /// Remove all errors for one property without re-validating.
    ///
    /// For display collaborators: typically invoked when a field is edited
    /// and should reset its own error state.
    pub fn clear_errors_on(&self, property: &str) {
        self.write().errors.clear_on(property);
    }

    /// Discard all errors and reset to idle.
    ///
    /// Never waits on in-flight checks; a discarded run's late settlements
    /// complete into dropped receivers.
    pub fn clear_validations(&self) {
        let mut inner = self.write();
        inner.errors.clear();
        inner.state = RunState::Idle;
    }

    /// Run the subject's checks and resolve with its validity.
    ///
    /// Clears prior errors, invokes `will_validate` to register this run's
    /// checks, awaits all of them concurrently, and appends each invalid
    /// settlement to the error collection in registration order. On
    /// success, `did_validate` is invoked and the subject's validity is
    /// returned.
    ///
    /// If any check malfunctions the whole run aborts with
    /// [`RunError::Rule`]: no validity is produced, `did_validate` is not
    /// invoked, and the collection is left as cleared at run start. A call
    /// issued while a run is in flight is rejected with
    /// [`RunError::AlreadyValidating`].
    pub async fn validate<H: Validatable>(&self, host: &H) -> Result<bool, RunError> {
        {
            let mut inner = self.write();
            if inner.state.is_validating() {
                log::warn!("validate() rejected: a run is already in flight");
                return Err(RunError::AlreadyValidating);
            }
            inner.state = RunState::Validating;
            inner.errors.clear();
        }

        let mut run = ValidationRun::new(host);
        host.will_validate(&mut run);
        log::debug!("validating {} registered check(s)", run.len());

        match try_join_all(run.into_pending()).await {
            Ok(settlements) => {
                let (is_valid, errors) = {
                    let mut inner = self.write();
                    for settlement in settlements {
                        if let Settlement::Invalid { property, message } = settlement {
                            inner.errors.push(match property {
                                Some(property) => ValidationError::on(property, message),
                                None => ValidationError::subject_wide(message),
                            });
                        }
                    }
                    let is_valid = inner.errors.is_empty();
                    inner.state = if is_valid {
                        RunState::SettledValid
                    } else {
                        RunState::SettledInvalid
                    };
                    (is_valid, inner.errors.clone())
                };
                log::debug!("run settled: valid={}, {} error(s)", is_valid, errors.len());
                host.did_validate(is_valid, &errors);
                Ok(is_valid)
            }
            Err(e) => {
                self.write().state = RunState::Idle;
                log::warn!("run aborted by a malfunctioning rule: {}", e);
                Err(RunError::Rule(e))
            }
        }
    }
}

impl Clone for Validator {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
