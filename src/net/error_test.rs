use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn from_response_401_without_flag_is_unauthorized() {
    let err = ApiError::from_response(401, r#"{"error":"Invalid username or password"}"#);
    assert_eq!(
        err,
        ApiError::Unauthorized { message: "Invalid username or password".to_owned() }
    );
}

#[test]
fn from_response_401_with_flag_is_needs_verification() {
    let err = ApiError::from_response(
        401,
        r#"{"error":"Email not verified","needs_verification":true}"#,
    );
    assert_eq!(
        err,
        ApiError::NeedsVerification { message: "Email not verified".to_owned() }
    );
}

#[test]
fn from_response_401_with_false_flag_is_unauthorized() {
    let err = ApiError::from_response(401, r#"{"error":"nope","needs_verification":false}"#);
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn from_response_5xx_is_server_error() {
    let err = ApiError::from_response(503, r#"{"error":"down"}"#);
    assert_eq!(err, ApiError::ServerError { status: 503, message: "down".to_owned() });
}

#[test]
fn from_response_other_status_is_unknown() {
    let err = ApiError::from_response(404, r#"{"error":"Application not found"}"#);
    assert_eq!(
        err,
        ApiError::Unknown { status: Some(404), message: "Application not found".to_owned() }
    );
}

#[test]
fn from_response_non_json_body_falls_back_to_status_message() {
    let err = ApiError::from_response(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::ServerError { status: 502, message: "HTTP 502".to_owned() });
}

#[test]
fn from_response_empty_body_falls_back_to_status_message() {
    let err = ApiError::from_response(401, "");
    assert_eq!(err, ApiError::Unauthorized { message: "HTTP 401".to_owned() });
}

// =============================================================
// status
// =============================================================

#[test]
fn status_is_preserved_per_variant() {
    assert_eq!(ApiError::from_response(401, "").status(), Some(401));
    assert_eq!(ApiError::from_response(500, "").status(), Some(500));
    assert_eq!(ApiError::from_response(404, "").status(), Some(404));
    assert_eq!(ApiError::Network { message: "refused".to_owned() }.status(), None);
    assert_eq!(ApiError::LoginInFlight.status(), None);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_for_needs_verification_is_distinct() {
    let unauthorized = ApiError::from_response(401, r#"{"error":"Invalid username or password"}"#);
    let unverified = ApiError::from_response(401, r#"{"needs_verification":true}"#);
    assert_ne!(unauthorized.user_message(), unverified.user_message());
    assert!(unverified.user_message().contains("verified"));
}

#[test]
fn user_message_surfaces_server_text_for_unauthorized() {
    let err = ApiError::Unauthorized { message: "Invalid username or password".to_owned() };
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[test]
fn user_message_for_network_failure_is_friendly() {
    let err = ApiError::Network { message: "connection refused".to_owned() };
    assert!(err.user_message().contains("Could not reach the server"));
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ErrorBody = serde_json::from_str("{}").expect("empty object parses");
    assert_eq!(body, ErrorBody::default());
}
