use courses_core::model::course_instance::CourseInstance;
use sea_orm::Set;

use crate::entity::course_instance;

impl From<CourseInstance> for course_instance::ActiveModel {
    fn from(value: CourseInstance) -> Self {
        Self {
            id: Set(value.id),
            course_id: Set(value.course_id),
            semester_id: Set(value.semester_id),
        }
    }
}
