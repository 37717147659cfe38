use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("t0ken"), "Bearer t0ken");
}

#[test]
fn unavailable_is_a_network_failure() {
    assert!(matches!(unavailable(), ApiError::Network { .. }));
}
