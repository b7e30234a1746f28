use courses_core::model::teacher_registration::TeacherRegistration;
use sea_orm::DatabaseConnection;

use crate::staging::Staged;

mod mapper;
pub mod repository;

pub(crate) struct TeacherRegistrationProvider {
    pub db: DatabaseConnection,
    pub staged: Staged<TeacherRegistration>,
}
