use courses_core::model::course_instance::CourseInstance;
use sea_orm::DatabaseConnection;

use crate::staging::Staged;

mod mapper;
pub mod repository;

pub(crate) struct CourseInstanceProvider {
    pub db: DatabaseConnection,
    pub staged: Staged<CourseInstance>,
}
