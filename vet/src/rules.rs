//! Property validator contract and the built-in rules.
//!
//! Every rule shares the same skeleton: read one named property off the
//! host, short-circuit on blankness per the options, then delegate to a
//! rule-specific predicate. New rules are ordinary functions built on
//! [`ValidationRun::validates_property`]; the engine is never touched.

use crate::config;
use crate::message::{Message, MessageContext};
use crate::options::RuleOptions;
use crate::outcome::{Outcome, OutcomeFuture, RuleError};
use crate::run::ValidationRun;
use crate::value::Value;

/// Scoped handle handed to rule predicates.
///
/// Exposes the property being checked, its value, the options bag, and the
/// settlement verbs. `invalid()` resolves the final message against any
/// `options.message` override before settling.
pub struct PropertyContext<'a> {
    property: &'a str,
    value: &'a Value,
    options: &'a RuleOptions,
    outcome: &'a Outcome,
}

impl PropertyContext<'_> {
    /// Name of the property being checked.
    pub fn property(&self) -> &str {
        self.property
    }

    /// Value being checked.
    pub fn value(&self) -> &Value {
        self.value
    }

    /// The options bag the rule was configured with.
    pub fn options(&self) -> &RuleOptions {
        self.options
    }

    /// Settle the check as valid.
    pub fn valid(&self) {
        self.outcome.valid();
    }

    /// Settle the check as invalid for this property.
    ///
    /// The final message is `options.message` when set (derived messages
    /// receive the settlement context), otherwise `default_message`.
    pub fn invalid(&self, default_message: &str) {
        let context = MessageContext {
            property: self.property,
            value: self.value,
            options: self.options,
        };
        let message = match &self.options.message {
            Some(message) => message.resolve(&context),
            None => default_message.to_string(),
        };
        self.outcome.invalid_on(self.property, message);
    }

    /// Fail the check with an unexpected error, aborting the run.
    pub fn error(&self, err: impl Into<RuleError>) {
        self.outcome.error(err);
    }
}

impl ValidationRun<'_> {
    /// Register a check for one named property.
    ///
    /// Reads the property once, at registration. With `allow_blank` set the
    /// check settles valid without invoking the predicate; with a blank
    /// value it settles invalid with the blank-value message. Otherwise the
    /// predicate decides through its [`PropertyContext`].
    pub fn validates_property<P>(
        &mut self,
        property: &str,
        options: RuleOptions,
        predicate: P,
    ) -> OutcomeFuture
    where
        P: FnOnce(&PropertyContext<'_>),
    {
        let value = self.property(property);
        let property = property.to_string();

        self.validates(move |outcome| {
            if options.allow_blank {
                return outcome.valid();
            }
            if value.is_blank() {
                return outcome.invalid_on(property, config::BLANK_MESSAGE);
            }

            predicate(&PropertyContext {
                property: &property,
                value: &value,
                options: &options,
                outcome: &outcome,
            });
        })
    }

    /// Invalid unless the configured pattern matches the value.
    ///
    /// A missing pattern is a defect in the rule definition and fails the
    /// check rather than settling invalid.
    pub fn validates_format(&mut self, property: &str, options: RuleOptions) -> OutcomeFuture {
        self.validates_property(property, options, |ctx| match &ctx.options().pattern {
            Some(pattern) => {
                if pattern.is_match(&ctx.value().to_string()) {
                    ctx.valid();
                } else {
                    ctx.invalid("has incorrect format");
                }
            }
            None => {
                log::warn!("format rule on '{}' has no pattern", ctx.property());
                ctx.error("format rule requires a pattern");
            }
        })
    }

    /// Invalid unless the value's length falls within the configured bounds.
    ///
    /// Checks run in a fixed order: no measurable length, the length-1 with
    /// min-1 case, then min, then max. The length-1/min-1 case reports
    /// "must be provided" and is user-visible behavior, kept as-is.
    pub fn validates_length(&mut self, property: &str, options: RuleOptions) -> OutcomeFuture {
        self.validates_property(property, options, |ctx| {
            let min = ctx.options().min;
            let max = ctx.options().max;

            let length = match ctx.value().length() {
                Some(length) if length > 0 => length,
                _ => return ctx.invalid(config::BLANK_MESSAGE),
            };

            if length == 1 && min == Some(1) {
                return ctx.invalid(config::BLANK_MESSAGE);
            }
            if let Some(min) = min {
                if length < min {
                    return ctx.invalid(&format!("must be at least {} characters", min));
                }
            }
            if let Some(max) = max {
                if length > max {
                    return ctx.invalid(&format!("must be no longer than {} characters", max));
                }
            }

            ctx.valid();
        })
    }

    /// Invalid unless the value looks like an email address.
    ///
    /// Delegates to the format rule with the default email pattern and
    /// message; both are overridable through the options.
    pub fn validates_email(&mut self, property: &str, mut options: RuleOptions) -> OutcomeFuture {
        if options.message.is_none() {
            options.message = Some(Message::from("is not a valid address"));
        }
        if options.pattern.is_none() {
            options.pattern = Some(config::email_pattern());
        }
        self.validates_format(property, options)
    }

    /// Invalid unless the value passes the permissive numeric test.
    pub fn validates_numeric(&mut self, property: &str, options: RuleOptions) -> OutcomeFuture {
        self.validates_property(property, options, |ctx| {
            if ctx.value().is_numeric() {
                ctx.valid();
            } else {
                ctx.invalid("is not a number");
            }
        })
    }

    /// Invalid unless the value is non-blank.
    ///
    /// Forces `allow_blank = false` unconditionally; the option cannot
    /// re-enable blank values for a presence check.
    pub fn validates_presence(&mut self, property: &str, options: RuleOptions) -> OutcomeFuture {
        let options = options.allow_blank(false);
        self.validates_property(property, options, |ctx| {
            if ctx.value().is_present() {
                ctx.valid();
            } else {
                ctx.invalid(config::BLANK_MESSAGE);
            }
        })
    }
}
