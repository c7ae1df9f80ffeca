use super::*;
use crate::test_support::{ALICE, client, json, text, unreachable};

fn filled(username: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.set_username(username);
    form.set_password(password);
    form
}

// Scenario A
#[tokio::test]
async fn successful_login_navigates_to_dashboard() {
    let client = client(vec![json(200, ALICE)]);
    let mut form = filled("alice", "correct");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Navigate("/dashboard"));
    assert_eq!(form.error(), None);
    assert!(!form.is_submitting());
}

// Scenario B
#[tokio::test]
async fn rejected_login_shows_api_message() {
    let client = client(vec![json(401, r#"{"message":"Invalid credentials"}"#)]);
    let mut form = filled("alice", "wrong");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Invalid credentials"));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn unreachable_api_shows_transport_message() {
    let client = client(vec![unreachable("Failed to fetch")]);
    let mut form = filled("alice", "correct");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Failed to fetch"));
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn non_json_failure_shows_fallback() {
    let client = client(vec![text(503, "Service Unavailable")]);
    let mut form = filled("alice", "correct");
    form.submit(&client).await;
    assert_eq!(form.error(), Some("Unable to log in"));
}

#[tokio::test]
async fn empty_fields_never_reach_the_api() {
    let client = client(vec![]);
    let mut form = filled("", "secret");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some(MISSING_CREDENTIALS_MESSAGE));
    assert!(client.transport().requests().is_empty());
}

#[test]
fn begin_submit_blocks_reentry() {
    let mut form = filled("alice", "correct");
    assert!(form.begin_submit().is_some());
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Signing in...");
    assert_eq!(form.begin_submit(), None);
    assert!(form.is_submitting());
}

#[tokio::test]
async fn submit_while_in_flight_is_ignored() {
    let client = client(vec![json(200, ALICE)]);
    let mut form = filled("alice", "correct");
    form.begin_submit();
    assert_eq!(form.submit(&client).await, SubmitOutcome::Ignored);
    assert!(client.transport().requests().is_empty());
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut form = filled("alice", "wrong");
    form.begin_submit();
    form.finish(Err(AuthError::AuthenticationFailed("Invalid credentials".to_owned())));
    assert_eq!(form.error(), Some("Invalid credentials"));

    form.begin_submit();
    assert_eq!(form.error(), None);
}

#[test]
fn finish_with_blank_message_uses_fallback() {
    let mut form = filled("alice", "correct");
    form.begin_submit();
    assert_eq!(form.finish(Err(AuthError::AuthenticationFailed(String::new()))), SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Unable to log in"));
    assert_eq!(form.submit_label(), "Login");
}

#[test]
fn validate_credentials_keeps_values_as_typed() {
    let credentials = validate_credentials("  alice ", " pass ").unwrap();
    assert_eq!(credentials.username, "  alice ");
    assert_eq!(credentials.password, " pass ");
    assert_eq!(validate_credentials("alice", ""), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_credentials("", "pass"), Err(MISSING_CREDENTIALS_MESSAGE));
}

#[tokio::test]
async fn padded_username_is_sent_verbatim() {
    let client = client(vec![json(401, r#"{"message":"Invalid credentials"}"#)]);
    let mut form = filled(" alice ", "correct");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_str(requests[0].json_body.as_deref().unwrap()).unwrap();
    assert_eq!(body["username"], " alice ");
    assert_eq!(body["password"], "correct");
}

#[tokio::test]
async fn whitespace_username_is_left_to_the_api() {
    let client = client(vec![json(401, r#"{"message":"Invalid credentials"}"#)]);
    let mut form = filled("   ", "secret");
    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Invalid credentials"));
    assert_eq!(client.transport().requests().len(), 1);
}
