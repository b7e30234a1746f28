use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.health().await;

    // THEN
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.build_info().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "core-server");
    assert_eq!(resp["core"]["name"], "courses-core");
}

#[tokio::test]
async fn test_server_info_disabled() {
    // GIVEN
    let context = TestContext::new(Some(
        indoc::indoc! {"
            app:
                enableServerInfo: false
        "}
        .to_owned(),
    ))
    .await;

    // WHEN
    let resp = context.api.other.health().await;

    // THEN
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_openapi_documents_course_endpoints() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.other.openapi().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp["paths"]["/api/courses"]["get"].is_object());
    assert!(resp["paths"]["/api/courses/{id}/teachers"]["post"].is_object());
}

#[tokio::test]
async fn test_openapi_disabled() {
    // GIVEN
    let context = TestContext::new(Some(
        indoc::indoc! {"
            app:
                enableOpenApi: false
        "}
        .to_owned(),
    ))
    .await;

    // WHEN
    let resp = context.api.other.openapi().await;

    // THEN
    assert_eq!(resp.status(), 404);
}
