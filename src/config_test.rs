use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url(), "http://localhost:8080");
}

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn endpoint_joins_absolute_path() {
    let config = ApiConfig::new("https://api.example.com");
    assert_eq!(config.endpoint("/auth/login"), "https://api.example.com/auth/login");
}

#[test]
fn file_url_resolves_relative_upload_path() {
    let config = ApiConfig::default();
    assert_eq!(
        config.file_url("/uploads/123_resume.pdf"),
        "http://localhost:8080/uploads/123_resume.pdf"
    );
}
