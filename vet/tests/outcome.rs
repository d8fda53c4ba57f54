//! Tests for outcome adapter settlement semantics.

use std::time::Duration;

use vet::outcome::{Outcome, RuleError, Settlement};

#[tokio::test]
async fn test_valid_settles_valid() {
    let future = Outcome::capture(|outcome| outcome.valid());
    assert_eq!(future.await, Ok(Settlement::Valid));
}

#[tokio::test]
async fn test_invalid_one_arg_has_no_property() {
    let future = Outcome::capture(|outcome| outcome.invalid("is wrong"));
    assert_eq!(
        future.await,
        Ok(Settlement::Invalid {
            property: None,
            message: "is wrong".to_string(),
        })
    );
}

#[tokio::test]
async fn test_invalid_two_args_carries_property() {
    let future = Outcome::capture(|outcome| outcome.invalid_on("name", "is wrong"));
    assert_eq!(
        future.await,
        Ok(Settlement::Invalid {
            property: Some("name".to_string()),
            message: "is wrong".to_string(),
        })
    );
}

#[tokio::test]
async fn test_double_settle_is_noop() {
    let future = Outcome::capture(|outcome| {
        outcome.valid();
        outcome.invalid("too late");
    });
    assert_eq!(future.await, Ok(Settlement::Valid));
}

#[tokio::test]
async fn test_error_after_settle_is_noop() {
    let future = Outcome::capture(|outcome| {
        outcome.invalid_on("age", "is wrong");
        outcome.error("broken");
    });
    assert_eq!(
        future.await,
        Ok(Settlement::Invalid {
            property: Some("age".to_string()),
            message: "is wrong".to_string(),
        })
    );
}

#[tokio::test]
async fn test_settle_after_error_is_noop() {
    let future = Outcome::capture(|outcome| {
        outcome.error("broken");
        outcome.valid();
    });
    let err = future.await.unwrap_err();
    assert_eq!(err.message, "broken");
}

#[test]
fn test_rule_errors_compare_by_message() {
    assert_eq!(RuleError::new("boom"), RuleError::from("boom".to_string()));
    assert_ne!(RuleError::new("boom"), RuleError::from("bust"));
}

#[tokio::test]
async fn test_error_rejects_with_rule_error() {
    let future = Outcome::capture(|outcome| outcome.error(RuleError::new("lookup failed")));
    assert_eq!(future.await.unwrap_err().message, "lookup failed");
}

#[tokio::test]
async fn test_drop_without_settling_is_a_defect() {
    let future = Outcome::capture(|_outcome| {});
    let err = future.await.unwrap_err();
    assert!(err.message.contains("without settling"));
}

#[tokio::test]
async fn test_is_settled_flips_on_completion() {
    let (outcome, future) = Outcome::channel();
    assert!(!outcome.is_settled());
    outcome.valid();
    assert!(outcome.is_settled());
    assert_eq!(future.await, Ok(Settlement::Valid));
}

#[tokio::test]
async fn test_late_settlement_from_spawned_task() {
    let future = Outcome::capture(|outcome| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            outcome.invalid_on("email", "is taken");
        });
    });
    assert_eq!(
        future.await,
        Ok(Settlement::Invalid {
            property: Some("email".to_string()),
            message: "is taken".to_string(),
        })
    );
}

#[tokio::test]
async fn test_async_body_settling_resolves() {
    let future = Outcome::capture_async(|outcome| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        outcome.valid();
        Ok(())
    });
    assert_eq!(future.await, Ok(Settlement::Valid));
}

#[tokio::test]
async fn test_async_body_rejection_is_an_error() {
    let future = Outcome::capture_async(|_outcome| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Err(RuleError::new("backend unavailable"))
    });
    assert_eq!(future.await.unwrap_err().message, "backend unavailable");
}

#[tokio::test]
async fn test_async_rejection_after_settlement_is_noop() {
    let future = Outcome::capture_async(|outcome| async move {
        outcome.valid();
        Err(RuleError::new("too late"))
    });
    assert_eq!(future.await, Ok(Settlement::Valid));
}

#[tokio::test]
async fn test_shared_future_resolves_for_every_clone() {
    let future = Outcome::capture(|outcome| outcome.valid());
    let clone = future.clone();
    assert_eq!(future.await, Ok(Settlement::Valid));
    assert_eq!(clone.await, Ok(Settlement::Valid));
}
