use shared_types::CourseId;

/// Abstract definition of a course, instantiated per semester.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseTemplate {
    pub course_id: CourseId,
    /// Title in the default language
    pub name: String,
    pub name_en: String,
    pub description: String,
}
