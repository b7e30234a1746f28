use courses_core::model::person::Person;
use sea_orm::DatabaseConnection;

use crate::staging::Staged;

mod mapper;
pub mod repository;

pub(crate) struct PersonProvider {
    pub db: DatabaseConnection,
    pub staged: Staged<Person>,
}
