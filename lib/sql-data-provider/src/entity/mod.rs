pub mod course_instance;
pub mod course_template;
pub mod person;
pub mod teacher_registration;
