use regex::Regex;

use crate::message::{Message, MessageContext};

/// Options bag accepted by every property rule.
///
/// # Example
///
/// ```ignore
/// run.validates_length(
///     "username",
///     RuleOptions::new().min(3).max(20).message("pick a longer name"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    /// Skip the rule entirely when true: blank or not, the check settles
    /// valid without running the predicate.
    pub allow_blank: bool,
    /// Override for the rule's default message.
    pub message: Option<Message>,
    /// Pattern for format-style rules.
    pub pattern: Option<Regex>,
    /// Minimum length bound.
    pub min: Option<usize>,
    /// Maximum length bound.
    pub max: Option<usize>,
}

impl RuleOptions {
    /// Create an empty options bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether blank values are acceptable.
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Override the rule's default message.
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Override the rule's default message with one derived from the
    /// settlement context.
    pub fn message_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&MessageContext<'_>) -> String + Send + Sync + 'static,
    {
        self.message = Some(Message::derived(f));
        self
    }

    /// Set the pattern for format-style rules.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Set the minimum length bound.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum length bound.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}
