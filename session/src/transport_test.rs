use super::*;

fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
    ApiResponse { status, content_type: content_type.map(str::to_owned), body: body.to_owned() }
}

#[test]
fn carrier_from_present_header_forwards_it() {
    let carrier = CredentialCarrier::from_cookie_header(Some("session=abc; theme=dark"));
    assert_eq!(carrier, CredentialCarrier::Forwarded("session=abc; theme=dark".to_owned()));
    assert_eq!(carrier.forwarded_cookie(), Some("session=abc; theme=dark"));
}

#[test]
fn carrier_from_missing_or_blank_header_is_ambient() {
    assert_eq!(CredentialCarrier::from_cookie_header(None), CredentialCarrier::Ambient);
    assert_eq!(CredentialCarrier::from_cookie_header(Some("  ")), CredentialCarrier::Ambient);
    assert_eq!(CredentialCarrier::Ambient.forwarded_cookie(), None);
}

#[test]
fn carrier_debug_hides_cookie_value() {
    let rendered = format!("{:?}", CredentialCarrier::Forwarded("session=secret".to_owned()));
    assert!(!rendered.contains("secret"));
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(response(200, None, "").is_success());
    assert!(response(204, None, "").is_success());
    assert!(!response(199, None, "").is_success());
    assert!(!response(301, None, "").is_success());
    assert!(!response(401, None, "").is_success());
}

#[test]
fn json_payload_decodes_json_content_type() {
    let resp = response(401, Some("application/json; charset=utf-8"), r#"{"message":"Invalid credentials"}"#);
    assert_eq!(resp.json_payload(), Some(serde_json::json!({ "message": "Invalid credentials" })));
}

#[test]
fn json_payload_ignores_non_json_content_type() {
    let resp = response(500, Some("text/html"), r#"{"message":"looks like json"}"#);
    assert_eq!(resp.json_payload(), None);
}

#[test]
fn json_payload_ignores_missing_content_type() {
    assert_eq!(response(200, None, r#"{"username":"alice"}"#).json_payload(), None);
}

#[test]
fn json_payload_treats_broken_json_as_absent() {
    let resp = response(502, Some("application/json"), "<html>Bad Gateway</html>");
    assert_eq!(resp.json_payload(), None);
}

#[test]
fn json_payload_treats_empty_body_as_absent() {
    assert_eq!(response(403, Some("application/json"), "").json_payload(), None);
}

#[test]
fn request_constructors_set_method_and_body() {
    let get = ApiRequest::get("http://api/api/me".to_owned(), CredentialCarrier::Ambient);
    assert_eq!(get.method, Method::Get);
    assert_eq!(get.json_body, None);

    let post = ApiRequest::post_json("http://api/api/login".to_owned(), "{}".to_owned(), CredentialCarrier::Ambient);
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.json_body.as_deref(), Some("{}"));
}
