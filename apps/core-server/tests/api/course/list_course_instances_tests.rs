use serde_json::json;

use crate::utils::api_clients::courses::ListParams;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_course_instances_empty_store() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context.api.courses.list(Default::default()).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(
        resp,
        json!({
            "items": [],
            "paging": {
                "pageCount": 0,
                "pageSize": 10,
                "pageNumber": 1,
                "totalNumberOfItems": 0,
            }
        })
    );
}

#[tokio::test]
async fn test_list_course_instances_default_semester() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context.api.courses.list(Default::default()).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["items"],
        json!([{
            "courseInstanceId": 1337,
            "templateId": "T-514-VEFT",
            "name": "Vefþjónustur",
            "mainTeacher": "Daníel B. Sigurgeirsson",
        }])
    );
    assert_eq!(resp["paging"]["totalNumberOfItems"], 1);
    assert_eq!(resp["paging"]["pageCount"], 1);
}

#[tokio::test]
async fn test_list_course_instances_empty_semester_is_default() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            semester: Some(""),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["items"][0]["courseInstanceId"], 1337);
}

#[tokio::test]
async fn test_list_course_instances_english_without_main_teacher() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            semester: Some("20163"),
            language: Some("en-US,en;q=0.9"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["items"],
        json!([{
            "courseInstanceId": 1338,
            "templateId": "T-514-VEFT",
            "name": "Web Services",
            "mainTeacher": "",
        }])
    );
}

#[tokio::test]
async fn test_list_course_instances_unknown_semester() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            semester: Some("20171"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["items"], json!([]));
    assert_eq!(resp["paging"]["pageCount"], 0);
}

#[tokio::test]
async fn test_list_course_instances_page_out_of_range_returns_first_page() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    for page in ["5", "0", "-3", "first", "99999999999999999999", ""] {
        // WHEN
        let resp = context
            .api
            .courses
            .list(ListParams {
                page: Some(page),
                ..Default::default()
            })
            .await;

        // THEN
        assert_eq!(resp.status(), 200);
        let resp = resp.json_value().await;
        assert_eq!(resp["paging"]["pageNumber"], 1);
        assert_eq!(resp["items"][0]["courseInstanceId"], 1337);
    }
}

#[tokio::test]
async fn test_list_course_instances_invalid_page() {
    // GIVEN
    let context = TestContext::new_with_fixture().await;

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            page: Some("first"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["paging"]["pageNumber"], 1);
    assert_eq!(resp["items"][0]["courseInstanceId"], 1337);
}

#[tokio::test]
async fn test_list_course_instances_custom_page_size() {
    // GIVEN
    let context = TestContext::new(Some(
        indoc::indoc! {"
            courses:
                pageSize: 1
        "}
        .to_owned(),
    ))
    .await;
    sql_data_provider::test_utilities::insert_fixture_to_database(&context.db)
        .await
        .unwrap();
    sql_data_provider::test_utilities::insert_course_instance_to_database(
        &context.db,
        1400,
        "T-514-VEFT",
        "20153",
    )
    .await
    .unwrap();

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            page: Some("2"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["paging"],
        json!({
            "pageCount": 2,
            "pageSize": 1,
            "pageNumber": 2,
            "totalNumberOfItems": 2,
        })
    );
    assert_eq!(resp["items"][0]["courseInstanceId"], 1400);
    assert_eq!(resp["items"][0]["mainTeacher"], "");
}
