use std::path::{Path, PathBuf};
use std::sync::Arc;

use core_server::ServerError;
use core_server::seed::load_seed_file;
use courses_core::CoursesCore;
use courses_core::config::core_config::CoreConfig;
use courses_core::service::error::{ServiceError, ValidationError};
use courses_core::service::seed::dto::SeedResultDTO;
use serde_json::json;
use sql_data_provider::DataLayer;

use crate::utils::api_clients::courses::ListParams;
use crate::utils::context::TestContext;

fn shipped_seed_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/seed.json")
}

async fn core_with_empty_store() -> CoursesCore {
    let db = sql_data_provider::db_conn("sqlite::memory:").await.unwrap();
    CoursesCore::new(Arc::new(DataLayer::build(db)), CoreConfig::default()).unwrap()
}

#[tokio::test]
async fn test_server_loads_seed_file_at_startup() {
    // GIVEN
    let seed_file = shipped_seed_file();
    let context = TestContext::new(Some(format!(
        "app:\n    seedFile: '{}'\n",
        seed_file.display()
    )))
    .await;

    // WHEN
    let resp = context
        .api
        .courses
        .list(ListParams {
            language: Some("en"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["items"],
        json!([{
            "courseInstanceId": 1337,
            "templateId": "T-514-VEFT",
            "name": "Web Services",
            "mainTeacher": "Daníel B. Sigurgeirsson",
        }])
    );
}

#[tokio::test]
async fn test_load_shipped_seed_file_once() {
    // GIVEN
    let core = core_with_empty_store().await;

    // WHEN
    let first = load_seed_file(&core, &shipped_seed_file()).await.unwrap();
    let second = load_seed_file(&core, &shipped_seed_file()).await.unwrap();

    // THEN
    assert_eq!(
        first,
        SeedResultDTO {
            persons: 2,
            course_templates: 1,
            course_instances: 2,
            teacher_registrations: 1,
        }
    );
    assert_eq!(second, SeedResultDTO::default());
}

#[tokio::test]
async fn test_load_seed_file_with_dangling_reference() {
    // GIVEN
    let core = core_with_empty_store().await;
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        json!({
            "courseInstances": [
                { "id": 1, "courseId": "T-000-NONE", "semesterId": "20153" }
            ]
        })
        .to_string(),
    )
    .unwrap();

    // WHEN
    let result = load_seed_file(&core, file.path()).await;

    // THEN
    assert!(matches!(
        result,
        Err(ServerError::Seed(ServiceError::Validation(
            ValidationError::UnknownCourseTemplate(_)
        )))
    ));
}
