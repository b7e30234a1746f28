use serde_json::json;

use crate::utils::api_clients::courses::ListParams;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_add_assistant_teacher_success() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1337, "1234567890", "AssistantTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    assert_eq!(
        resp.header("location").as_deref(),
        Some("/api/courses/1337/teachers")
    );
    let resp = resp.json_value().await;
    assert_eq!(
        resp,
        json!({
            "ssn": "1234567890",
            "name": "Guðrún Guðmundsdóttir",
        })
    );

    // main teacher is unchanged
    let list = context.api.courses.list(Default::default()).await;
    let list = list.json_value().await;
    assert_eq!(list["items"][0]["mainTeacher"], "Daníel B. Sigurgeirsson");
}

#[tokio::test]
async fn test_add_main_teacher_shows_in_listing() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1338, "1234567890", "MainTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);

    let list = context
        .api
        .courses
        .list(ListParams {
            semester: Some("20163"),
            ..Default::default()
        })
        .await;
    let list = list.json_value().await;
    assert_eq!(list["items"][0]["mainTeacher"], "Guðrún Guðmundsdóttir");
}

#[tokio::test]
async fn test_add_second_main_teacher_fails() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1337, "1234567890", "MainTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "COURSE_ALREADY_HAS_A_MAIN_TEACHER");
    assert_eq!(resp["message"], "COURSE_ALREADY_HAS_A_MAIN_TEACHER");
}

#[tokio::test]
async fn test_add_teacher_twice_fails() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1337, "1203735289", "AssistantTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE");
    assert_eq!(resp["message"], "PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE");
}

#[tokio::test]
async fn test_add_same_assistant_twice_fails_second_time() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;
    let first = context
        .api
        .courses
        .add_teacher(&1338, "1234567890", "AssistantTeacher")
        .await;
    assert_eq!(first.status(), 201);

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1338, "1234567890", "AssistantTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE");
}

#[tokio::test]
async fn test_add_teacher_unknown_course_instance() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&9999, "1234567890", "AssistantTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0001");
    assert_eq!(resp["cause"]["message"], "Course instance `9999` not found");
}

#[tokio::test]
async fn test_add_teacher_unknown_person() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1337, "9876543210", "AssistantTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0002");
}

#[tokio::test]
async fn test_add_teacher_hidden_error_cause() {
    // GIVEN
    let context = TestContext::new(Some(
        indoc::indoc! {"
            app:
                hideErrorResponseCause: true
        "}
        .to_owned(),
    ))
    .await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&9999, "1234567890", "MainTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0001");
    assert!(resp.get("cause").is_none());
}

#[tokio::test]
async fn test_add_teacher_invalid_type() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&1337, "1234567890", "Dean")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0003");
}

#[tokio::test]
async fn test_add_teacher_missing_ssn() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher_raw(&1337, json!({ "type": "MainTeacher" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0003");
}

#[tokio::test]
async fn test_add_teacher_invalid_course_instance_id() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .add_teacher(&"veft", "1234567890", "MainTeacher")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0003");
}
