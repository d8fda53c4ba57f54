pub mod config;
pub mod errors;
pub mod host;
pub mod message;
pub mod options;
pub mod outcome;
pub mod rules;
pub mod run;
pub mod text;
pub mod validator;
pub mod value;

pub mod prelude {
    pub use crate::errors::{ErrorCollection, ValidationError};
    pub use crate::host::{Validatable, ValidationHost};
    pub use crate::message::{Message, MessageContext};
    pub use crate::options::RuleOptions;
    pub use crate::outcome::{Outcome, OutcomeFuture, RuleError, Settlement};
    pub use crate::rules::PropertyContext;
    pub use crate::run::ValidationRun;
    pub use crate::validator::{RunError, RunState, Validator};
    pub use crate::value::Value;
}
