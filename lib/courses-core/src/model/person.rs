use shared_types::{PersonId, Ssn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub ssn: Ssn,
    pub name: String,
    pub email: String,
}
