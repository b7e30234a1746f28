use one_dto_mapper::Into;
use serde::Deserialize;
use shared_types::{CourseId, CourseInstanceId, PersonId, Ssn, TeacherRegistrationId};

use crate::model::course_instance::CourseInstance;
use crate::model::course_template::CourseTemplate;
use crate::model::person::Person;
use crate::model::teacher_registration::{TeacherRegistration, TeacherType};

/// Initial content of an empty store.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDataDTO {
    #[serde(default)]
    pub persons: Vec<SeedPersonDTO>,
    #[serde(default)]
    pub course_templates: Vec<SeedCourseTemplateDTO>,
    #[serde(default)]
    pub course_instances: Vec<SeedCourseInstanceDTO>,
    #[serde(default)]
    pub teacher_registrations: Vec<SeedTeacherRegistrationDTO>,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(Person)]
#[serde(rename_all = "camelCase")]
pub struct SeedPersonDTO {
    pub id: PersonId,
    pub ssn: Ssn,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(CourseTemplate)]
#[serde(rename_all = "camelCase")]
pub struct SeedCourseTemplateDTO {
    pub course_id: CourseId,
    pub name: String,
    pub name_en: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(CourseInstance)]
#[serde(rename_all = "camelCase")]
pub struct SeedCourseInstanceDTO {
    pub id: CourseInstanceId,
    pub course_id: CourseId,
    pub semester_id: String,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(TeacherRegistration)]
#[serde(rename_all = "camelCase")]
pub struct SeedTeacherRegistrationDTO {
    #[serde(default)]
    pub id: Option<TeacherRegistrationId>,
    pub course_instance_id: CourseInstanceId,
    pub ssn: Ssn,
    pub r#type: SeedTeacherTypeDTO,
}

#[derive(Clone, Copy, Debug, Deserialize, Into)]
#[into(TeacherType)]
pub enum SeedTeacherTypeDTO {
    MainTeacher,
    AssistantTeacher,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SeedResultDTO {
    pub persons: usize,
    pub course_templates: usize,
    pub course_instances: usize,
    pub teacher_registrations: usize,
}
