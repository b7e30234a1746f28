use courses_core::model::course_template::CourseTemplate;
use sea_orm::DatabaseConnection;

use crate::staging::Staged;

mod mapper;
pub mod repository;

pub(crate) struct CourseTemplateProvider {
    pub db: DatabaseConnection,
    pub staged: Staged<CourseTemplate>,
}
