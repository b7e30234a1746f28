use courses_core::model::person::Person;
use sea_orm::Set;

use crate::entity::person;

impl From<Person> for person::ActiveModel {
    fn from(value: Person) -> Self {
        Self {
            id: Set(value.id),
            ssn: Set(value.ssn),
            name: Set(value.name),
            email: Set(value.email),
        }
    }
}
