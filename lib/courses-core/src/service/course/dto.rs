use one_dto_mapper::From;
use shared_types::{CourseId, CourseInstanceId, Ssn};

use crate::model::common::GetListResponse;
use crate::model::person::Person;
use crate::model::teacher_registration::TeacherType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseInstanceResponseDTO {
    pub course_instance_id: CourseInstanceId,
    pub template_id: CourseId,
    /// Title in the language selected by the caller's hint
    pub name: String,
    /// Name of the main teacher, empty if there is none
    pub main_teacher: String,
}

pub type GetCourseInstanceListResponseDTO = GetListResponse<CourseInstanceResponseDTO>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddTeacherRequestDTO {
    pub ssn: Ssn,
    pub r#type: TeacherType,
}

#[derive(Clone, Debug, Eq, PartialEq, From)]
#[from(Person)]
pub struct PersonResponseDTO {
    pub ssn: Ssn,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CourseLanguage {
    Default,
    English,
}
