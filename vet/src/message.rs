use std::fmt;
use std::sync::Arc;

use crate::options::RuleOptions;
use crate::value::Value;

/// Context handed to derived messages at settlement time.
pub struct MessageContext<'a> {
    /// Name of the property the rule is checking.
    pub property: &'a str,
    /// Value the rule checked.
    pub value: &'a Value,
    /// The options bag the rule was configured with.
    pub options: &'a RuleOptions,
}

/// An error message that is either a fixed string or derived from the
/// settlement context.
#[derive(Clone)]
pub enum Message {
    /// Fixed message text.
    Static(String),
    /// Message produced from the context when the check settles invalid.
    Derived(Arc<dyn Fn(&MessageContext<'_>) -> String + Send + Sync>),
}

impl Message {
    /// Create a derived message.
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&MessageContext<'_>) -> String + Send + Sync + 'static,
    {
        Self::Derived(Arc::new(f))
    }

    /// Resolve the final message text.
    pub fn resolve(&self, context: &MessageContext<'_>) -> String {
        match self {
            Self::Static(s) => s.clone(),
            Self::Derived(f) => f(context),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").field(&"<fn>").finish(),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Static(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Static(s)
    }
}
