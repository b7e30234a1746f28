use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{CourseInstanceId, TeacherRegistrationId};

use crate::entity::{course_instance, course_template, person, teacher_registration};
use crate::{DataLayer, db_conn};

pub const SSN_DABS: &str = "1203735289";
pub const SSN_GUNNA: &str = "1234567890";
pub const NAME_DABS: &str = "Daníel B. Sigurgeirsson";
pub const NAME_GUNNA: &str = "Guðrún Guðmundsdóttir";
pub const COURSEID_VEFT_20153: i32 = 1337;
pub const COURSEID_VEFT_20163: i32 = 1338;

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url).await.unwrap();
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

impl DataLayer {
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

pub async fn insert_person_to_database(
    database: &DatabaseConnection,
    id: i32,
    ssn: &str,
    name: &str,
) -> Result<(), DbErr> {
    person::ActiveModel {
        id: Set(id.into()),
        ssn: Set(ssn.into()),
        name: Set(name.to_owned()),
        email: Set(format!("{id}@ru.is")),
    }
    .insert(database)
    .await?;

    Ok(())
}

pub async fn insert_course_template_to_database(
    database: &DatabaseConnection,
    course_id: &str,
    name: &str,
    name_en: &str,
) -> Result<(), DbErr> {
    course_template::ActiveModel {
        course_id: Set(course_id.into()),
        name: Set(name.to_owned()),
        name_en: Set(name_en.to_owned()),
        description: Set(String::new()),
    }
    .insert(database)
    .await?;

    Ok(())
}

pub async fn insert_course_instance_to_database(
    database: &DatabaseConnection,
    id: i32,
    course_id: &str,
    semester_id: &str,
) -> Result<CourseInstanceId, DbErr> {
    let model = course_instance::ActiveModel {
        id: Set(id.into()),
        course_id: Set(course_id.into()),
        semester_id: Set(semester_id.to_owned()),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

pub async fn insert_teacher_registration_to_database(
    database: &DatabaseConnection,
    course_instance_id: i32,
    ssn: &str,
    r#type: teacher_registration::TeacherType,
) -> Result<TeacherRegistrationId, DbErr> {
    let model = teacher_registration::ActiveModel {
        id: Default::default(),
        course_instance_id: Set(course_instance_id.into()),
        ssn: Set(ssn.into()),
        r#type: Set(r#type),
    }
    .insert(database)
    .await?;

    Ok(model.id)
}

/// Dabs and Gunna, T-514-VEFT in semesters 20153 and 20163, Dabs main teacher in 20153.
pub async fn insert_fixture_to_database(database: &DatabaseConnection) -> Result<(), DbErr> {
    insert_person_to_database(database, 1, SSN_DABS, NAME_DABS).await?;
    insert_person_to_database(database, 2, SSN_GUNNA, NAME_GUNNA).await?;
    insert_course_template_to_database(database, "T-514-VEFT", "Vefþjónustur", "Web Services")
        .await?;
    insert_course_instance_to_database(database, COURSEID_VEFT_20153, "T-514-VEFT", "20153")
        .await?;
    insert_course_instance_to_database(database, COURSEID_VEFT_20163, "T-514-VEFT", "20163")
        .await?;
    insert_teacher_registration_to_database(
        database,
        COURSEID_VEFT_20153,
        SSN_DABS,
        teacher_registration::TeacherType::MainTeacher,
    )
    .await?;

    Ok(())
}
