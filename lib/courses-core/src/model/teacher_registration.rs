use shared_types::{CourseInstanceId, Ssn, TeacherRegistrationId};
use strum::{AsRefStr, Display};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeacherRegistration {
    /// `None` until assigned by storage
    pub id: Option<TeacherRegistrationId>,
    pub course_instance_id: CourseInstanceId,
    pub ssn: Ssn,
    pub r#type: TeacherType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, AsRefStr)]
pub enum TeacherType {
    MainTeacher = 1,
    AssistantTeacher = 2,
}
