//! Signup Form Example
//!
//! A demo showcasing vet's validation engine:
//! - Declaring per-run rules in `will_validate`
//! - Built-in presence/length/email/numeric rules
//! - A custom async check (username availability)
//! - Reading the aggregated error state after a run
//!
//! Run with: `cargo run -p vet --example signup`

use std::collections::HashMap;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use vet::prelude::*;

struct SignupForm {
    props: HashMap<String, Value>,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            props: HashMap::new(),
        }
    }
}

impl ValidationHost for SignupForm {
    fn property(&self, name: &str) -> Value {
        self.props.get(name).cloned().unwrap_or(Value::Null)
    }

    fn set_property(&mut self, name: &str, value: Value) {
        self.props.insert(name.to_string(), value);
    }
}

impl Validatable for SignupForm {
    fn will_validate(&self, run: &mut ValidationRun<'_>) {
        let _ = run.validates_presence("fullName", RuleOptions::new());
        let _ = run.validates_length("password", RuleOptions::new().min(8).max(64));
        let _ = run.validates_email("email", RuleOptions::new());
        let _ = run.validates_numeric(
            "age",
            RuleOptions::new()
                .message_with(|ctx| format!("'{}' is not a valid age", ctx.value)),
        );

        // Custom async check: pretend to ask a backend whether the
        // username is still available.
        let username = run.property("username");
        let _ = run.validates_async(move |outcome| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            if username.to_string() == "admin" {
                outcome.invalid_on("username", "is already taken");
            } else {
                outcome.valid();
            }
            Ok(())
        });
    }

    fn did_validate(&self, is_valid: bool, errors: &ErrorCollection) {
        log::debug!("signup form settled: valid={}, {} error(s)", is_valid, errors.len());
    }
}

fn print_errors(errors: &ErrorCollection) {
    for error in errors {
        println!("  - {}", error);
    }
}

#[tokio::main]
async fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut form = SignupForm::new();
    form.set_property("fullName", Value::from(""));
    form.set_property("password", Value::from("short"));
    form.set_property("email", Value::from("nodomain"));
    form.set_property("age", Value::from("old"));
    form.set_property("username", Value::from("admin"));

    let validator = Validator::new();

    match validator.validate(&form).await {
        Ok(true) => println!("first attempt: valid"),
        Ok(false) => {
            println!("first attempt: invalid");
            print_errors(&validator.errors());
        }
        Err(e) => eprintln!("validation could not complete: {}", e),
    }

    // Fix the form and run again.
    form.set_property("fullName", Value::from("Ada Lovelace"));
    form.set_property("password", Value::from("correct horse battery"));
    form.set_property("email", Value::from("ada@example.com"));
    form.set_property("age", Value::from(36));
    form.set_property("username", Value::from("ada"));

    match validator.validate(&form).await {
        Ok(true) => println!("second attempt: valid"),
        Ok(false) => {
            println!("second attempt: invalid");
            print_errors(&validator.errors());
        }
        Err(e) => eprintln!("validation could not complete: {}", e),
    }
}
