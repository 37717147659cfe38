use super::*;

// =============================================================
// Credentials serialization
// =============================================================

#[test]
fn login_credentials_serialize_with_identifier_key() {
    let creds = LoginCredentials {
        identifier: "ada".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_value(&creds).expect("serializes");
    assert_eq!(json, serde_json::json!({"identifier": "ada", "password": "hunter2"}));
}

#[test]
fn register_credentials_serialize_all_fields() {
    let creds = RegisterCredentials {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_value(&creds).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "hunter2",
        })
    );
}

// =============================================================
// Response DTOs
// =============================================================

#[test]
fn profile_response_unwraps_user() {
    let parsed: ProfileResponse =
        serde_json::from_str(r#"{"user":{"id":1,"username":"ada"}}"#).expect("parses");
    assert_eq!(parsed.user, User { id: 1, username: "ada".to_owned() });
}

#[test]
fn signup_response_user_id_is_optional() {
    let with_id: SignupResponse =
        serde_json::from_str(r#"{"message":"check your inbox","user_id":7}"#).expect("parses");
    assert_eq!(with_id.user_id, Some(7));

    let without_id: SignupResponse =
        serde_json::from_str(r#"{"message":"check your inbox"}"#).expect("parses");
    assert_eq!(without_id.user_id, None);
}

// =============================================================
// ApplicationStatus wire encoding
// =============================================================

#[test]
fn status_serializes_as_integer() {
    let json = serde_json::to_string(&ApplicationStatus::OfferReceived).expect("serializes");
    assert_eq!(json, "2");
}

#[test]
fn status_deserializes_from_integer() {
    let status: ApplicationStatus = serde_json::from_str("3").expect("parses");
    assert_eq!(status, ApplicationStatus::Rejected);
}

#[test]
fn status_rejects_unknown_discriminant() {
    let result = serde_json::from_str::<ApplicationStatus>("9");
    assert!(result.is_err());
}

#[test]
fn status_labels_are_distinct() {
    let variants = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::OfferReceived,
        ApplicationStatus::Rejected,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

#[test]
fn badge_colors_only_for_terminal_statuses() {
    assert_eq!(ApplicationStatus::OfferReceived.badge_color(), Some("success"));
    assert_eq!(ApplicationStatus::Rejected.badge_color(), Some("danger"));
    assert_eq!(ApplicationStatus::Applied.badge_color(), None);
    assert_eq!(ApplicationStatus::Interview.badge_color(), None);
}

// =============================================================
// Application
// =============================================================

#[test]
fn application_parses_backend_payload() {
    let json = r#"{
        "id": 4,
        "company": "Initech",
        "position": "Backend Intern",
        "status": 1,
        "location": "Remote",
        "applied_date": "2025-06-01T00:00:00Z",
        "term": "Summer 2026",
        "resume_url": "/uploads/4_resume.pdf",
        "user_id": 1
    }"#;
    let app: Application = serde_json::from_str(json).expect("parses");
    assert_eq!(app.status, ApplicationStatus::Interview);
    assert_eq!(app.note, None);
    assert_eq!(app.resume_url, "/uploads/4_resume.pdf");
}

// =============================================================
// ApplicationDraft form fields
// =============================================================

#[test]
fn form_fields_encode_status_as_integer_string() {
    let draft = ApplicationDraft {
        company: "Initech".to_owned(),
        position: "Backend Intern".to_owned(),
        status: ApplicationStatus::OfferReceived,
        location: "Remote".to_owned(),
        applied_date: "2025-06-01T00:00:00Z".to_owned(),
        term: "Summer 2026".to_owned(),
        note: None,
        resume: None,
    };
    let fields = draft.form_fields();
    assert!(fields.contains(&("status", "2".to_owned())));
    assert!(fields.iter().all(|(name, _)| *name != "note"));
}

#[test]
fn form_fields_include_note_when_present() {
    let draft = ApplicationDraft {
        note: Some("follow up next week".to_owned()),
        ..ApplicationDraft::default()
    };
    let fields = draft.form_fields();
    assert!(fields.contains(&("note", "follow up next week".to_owned())));
}
