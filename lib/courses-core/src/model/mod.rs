pub mod common;
pub mod course_instance;
pub mod course_template;
pub mod list_query;
pub mod person;
pub mod teacher_registration;
