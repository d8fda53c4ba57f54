//! Host capability traits.

use crate::errors::ErrorCollection;
use crate::run::ValidationRun;
use crate::value::Value;

/// Capability interface the coordinator holds on a subject: named,
/// readable/writable properties of arbitrary value types.
pub trait ValidationHost: Send + Sync {
    /// Read a named property. Unknown names return [`Value::Null`].
    fn property(&self, name: &str) -> Value;

    /// Write a named property.
    ///
    /// The engine itself only reads; the write half is for wiring
    /// collaborators that bind input controls to properties.
    fn set_property(&mut self, name: &str, value: Value);
}

/// A subject that can be validated: a host plus the run lifecycle hooks.
pub trait Validatable: ValidationHost {
    /// Called at the start of each run to register this run's checks.
    fn will_validate(&self, run: &mut ValidationRun<'_>) {
        let _ = run;
    }

    /// Called after a run settles, with the final validity and errors.
    ///
    /// Not called when the run aborts on a malfunctioning rule.
    fn did_validate(&self, is_valid: bool, errors: &ErrorCollection) {
        let _ = (is_valid, errors);
    }
}
