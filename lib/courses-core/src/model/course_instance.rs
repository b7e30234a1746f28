use shared_types::{CourseId, CourseInstanceId};

/// One semester's offering of a [`super::course_template::CourseTemplate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseInstance {
    pub id: CourseInstanceId,
    pub course_id: CourseId,
    pub semester_id: String,
}
