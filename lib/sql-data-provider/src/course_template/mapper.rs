use courses_core::model::course_template::CourseTemplate;
use sea_orm::Set;

use crate::entity::course_template;

impl From<CourseTemplate> for course_template::ActiveModel {
    fn from(value: CourseTemplate) -> Self {
        Self {
            course_id: Set(value.course_id),
            name: Set(value.name),
            name_en: Set(value.name_en),
            description: Set(value.description),
        }
    }
}
