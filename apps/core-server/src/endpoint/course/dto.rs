use courses_core::model::common::Paging;
use courses_core::model::teacher_registration::TeacherType;
use courses_core::service::course::dto::{
    AddTeacherRequestDTO, CourseInstanceResponseDTO, GetCourseInstanceListResponseDTO,
    PersonResponseDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{CourseId, CourseInstanceId, Ssn};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct GetCourseInstancesQueryParams {
    /// Semester to list, e.g. `20153`. The configured default semester is used when omitted.
    #[param(nullable = false, example = "20153")]
    pub semester: Option<String>,
    /// 1-based page number. Out of range or non-numeric values return the first page.
    #[param(value_type = Option<i64>, nullable = false, example = 1)]
    pub page: Option<String>,
}

impl GetCourseInstancesQueryParams {
    pub(crate) fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CourseInstanceResponseDTO)]
pub(crate) struct CourseInstanceResponseRestDTO {
    pub course_instance_id: CourseInstanceId,
    pub template_id: CourseId,
    #[schema(example = "Web Services")]
    pub name: String,
    /// Empty when the course instance has no main teacher.
    #[schema(example = "Daníel B. Sigurgeirsson")]
    pub main_teacher: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Paging)]
pub(crate) struct PagingRestDTO {
    pub page_count: u64,
    pub page_size: u64,
    pub page_number: u64,
    pub total_number_of_items: u64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetCourseInstanceListResponseDTO)]
pub(crate) struct GetCourseInstanceListResponseRestDTO {
    #[from(with_fn = convert_inner)]
    pub items: Vec<CourseInstanceResponseRestDTO>,
    pub paging: PagingRestDTO,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(AddTeacherRequestDTO)]
pub(crate) struct AddTeacherRequestRestDTO {
    pub ssn: Ssn,
    pub r#type: TeacherTypeRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, Into)]
#[into(TeacherType)]
pub(crate) enum TeacherTypeRestEnum {
    MainTeacher,
    AssistantTeacher,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(PersonResponseDTO)]
pub(crate) struct PersonResponseRestDTO {
    pub ssn: Ssn,
    #[schema(example = "Daníel B. Sigurgeirsson")]
    pub name: String,
}
