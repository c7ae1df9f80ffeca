use super::*;

#[test]
fn display_is_the_carried_message() {
    let err = AuthError::AuthenticationFailed("Invalid credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.message(), "Invalid credentials");
}

#[test]
fn session_load_failed_message() {
    let err = AuthError::SessionLoadFailed(SESSION_FALLBACK_MESSAGE.to_owned());
    assert_eq!(err.message(), "Unable to load session");
}

#[test]
fn transport_error_displays_inner_text() {
    assert_eq!(TransportError("connection refused".to_owned()).to_string(), "connection refused");
}
