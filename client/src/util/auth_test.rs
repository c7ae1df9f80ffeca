use super::*;
use session::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false, error: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            uuid: "u1".to_owned(),
            username: "alice".to_owned(),
            email: Some("alice@example.com".to_owned()),
            first_name: None,
            last_name: None,
        }),
        loading: false,
        error: None,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_check_failed() {
    let state = AuthState { user: None, loading: false, error: Some("Unable to load session".to_owned()) };
    assert!(!should_redirect_unauth(&state));
}
