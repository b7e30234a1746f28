use std::sync::Arc;

use super::entity_repository::Repository;
use super::error::DataLayerError;
use crate::model::course_instance::CourseInstance;
use crate::model::course_template::CourseTemplate;
use crate::model::person::Person;
use crate::model::teacher_registration::TeacherRegistration;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UnitOfWork: Send + Sync {
    fn persons(&self) -> Arc<dyn Repository<Person>>;
    fn course_templates(&self) -> Arc<dyn Repository<CourseTemplate>>;
    fn course_instances(&self) -> Arc<dyn Repository<CourseInstance>>;
    fn teacher_registrations(&self) -> Arc<dyn Repository<TeacherRegistration>>;

    /// Commits every staged entity in one transaction.
    /// Staged entities are discarded if the commit fails.
    async fn save(&self) -> Result<(), DataLayerError>;
}
