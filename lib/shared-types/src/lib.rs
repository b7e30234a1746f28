mod course_id;
mod course_instance_id;
mod macros;
mod person_id;
mod ssn;
mod teacher_registration_id;

pub use course_id::CourseId;
pub use course_instance_id::CourseInstanceId;
pub use person_id::PersonId;
pub use ssn::Ssn;
pub use teacher_registration_id::TeacherRegistrationId;
