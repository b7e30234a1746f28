use courses_core::model::teacher_registration::TeacherRegistration;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::entity::teacher_registration;

impl From<teacher_registration::Model> for TeacherRegistration {
    fn from(value: teacher_registration::Model) -> Self {
        Self {
            id: Some(value.id),
            course_instance_id: value.course_instance_id,
            ssn: value.ssn,
            r#type: value.r#type.into(),
        }
    }
}

impl From<TeacherRegistration> for teacher_registration::ActiveModel {
    fn from(value: TeacherRegistration) -> Self {
        Self {
            id: value.id.map_or(NotSet, Set),
            course_instance_id: Set(value.course_instance_id),
            ssn: Set(value.ssn),
            r#type: Set(value.r#type.into()),
        }
    }
}
