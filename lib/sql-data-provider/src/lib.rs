use std::sync::Arc;

use course_instance::CourseInstanceProvider;
use course_template::CourseTemplateProvider;
use courses_core::model::course_instance::CourseInstance;
use courses_core::model::course_template::CourseTemplate;
use courses_core::model::person::Person;
use courses_core::model::teacher_registration::TeacherRegistration;
use courses_core::repository::entity_repository::Repository;
use courses_core::repository::error::DataLayerError;
use courses_core::repository::unit_of_work::UnitOfWork;
use migration::{Migrator, MigratorTrait};
use person::PersonProvider;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use teacher_registration::TeacherRegistrationProvider;

use crate::mapper::to_transaction_error;

mod entity;
mod mapper;
mod staging;

pub mod course_instance;
pub mod course_template;
pub mod person;
pub mod teacher_registration;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub use sea_orm::DatabaseConnection as DbConn;


#[derive(Clone)]
pub struct DataLayer {
    db: DatabaseConnection,
    persons: Arc<PersonProvider>,
    course_templates: Arc<CourseTemplateProvider>,
    course_instances: Arc<CourseInstanceProvider>,
    teacher_registrations: Arc<TeacherRegistrationProvider>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            persons: Arc::new(PersonProvider {
                db: db.clone(),
                staged: Default::default(),
            }),
            course_templates: Arc::new(CourseTemplateProvider {
                db: db.clone(),
                staged: Default::default(),
            }),
            course_instances: Arc::new(CourseInstanceProvider {
                db: db.clone(),
                staged: Default::default(),
            }),
            teacher_registrations: Arc::new(TeacherRegistrationProvider {
                db: db.clone(),
                staged: Default::default(),
            }),
            db,
        }
    }
}

/// Connects to `database_url` and brings the schema up to date.
pub async fn db_conn(database_url: impl Into<String>) -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect(database_url.into()).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

#[async_trait::async_trait]
impl UnitOfWork for DataLayer {
    fn persons(&self) -> Arc<dyn Repository<Person>> {
        self.persons.clone()
    }

    fn course_templates(&self) -> Arc<dyn Repository<CourseTemplate>> {
        self.course_templates.clone()
    }

    fn course_instances(&self) -> Arc<dyn Repository<CourseInstance>> {
        self.course_instances.clone()
    }

    fn teacher_registrations(&self) -> Arc<dyn Repository<TeacherRegistration>> {
        self.teacher_registrations.clone()
    }

    async fn save(&self) -> Result<(), DataLayerError> {
        // staged entities are dropped whatever the outcome
        let persons = self.persons.staged.take();
        let course_templates = self.course_templates.staged.take();
        let course_instances = self.course_instances.staged.take();
        let teacher_registrations = self.teacher_registrations.staged.take();

        let staged_count = persons.len()
            + course_templates.len()
            + course_instances.len()
            + teacher_registrations.len();

        let txn = self.db.begin().await.map_err(to_transaction_error)?;

        // referenced rows first; dropping `txn` on error rolls everything back
        PersonProvider::insert_staged(&txn, persons).await?;
        CourseTemplateProvider::insert_staged(&txn, course_templates).await?;
        CourseInstanceProvider::insert_staged(&txn, course_instances).await?;
        TeacherRegistrationProvider::insert_staged(&txn, teacher_registrations).await?;

        txn.commit().await.map_err(to_transaction_error)?;

        tracing::debug!("Committed {staged_count} staged entities");
        Ok(())
    }
}
