use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn collection_path_matches_backend_route() {
    assert_eq!(APPLICATIONS_PATH, "/applications");
}

#[test]
fn item_path_embeds_the_id() {
    assert_eq!(application_path(42), "/applications/42");
}

// =============================================================
// Native build degradation
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_degrades_without_browser_networking() {
    let backend = HttpApplicationsBackend::new(ApiConfig::default());
    let result = futures::executor::block_on(backend.list(Some("t")));
    assert!(matches!(result, Err(ApiError::Network { .. })));

    let result = futures::executor::block_on(backend.delete(1, None));
    assert!(matches!(result, Err(ApiError::Network { .. })));
}
