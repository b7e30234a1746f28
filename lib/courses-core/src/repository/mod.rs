pub mod entity_repository;
pub mod error;
pub mod unit_of_work;
