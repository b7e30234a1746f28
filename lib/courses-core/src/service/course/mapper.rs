use std::collections::HashMap;

use shared_types::{CourseInstanceId, Ssn};

use super::dto::{CourseInstanceResponseDTO, CourseLanguage};
use crate::model::course_instance::CourseInstance;
use crate::model::course_template::CourseTemplate;
use crate::model::person::Person;
use crate::model::teacher_registration::{TeacherRegistration, TeacherType};

impl CourseLanguage {
    /// Coarse match: any hint containing `english_marker` selects English.
    pub fn from_hint(hint: &str, english_marker: &str) -> Self {
        if hint.contains(english_marker) {
            Self::English
        } else {
            Self::Default
        }
    }
}

pub(super) fn localized_name(template: &CourseTemplate, language: CourseLanguage) -> String {
    match language {
        CourseLanguage::English => template.name_en.to_owned(),
        CourseLanguage::Default => template.name.to_owned(),
    }
}

/// Main teacher name per course instance. The first main teacher registration of a course
/// wins; an unknown person yields an empty name.
pub(super) fn main_teachers_by_course(
    registrations: &[TeacherRegistration],
    persons: &[Person],
) -> HashMap<CourseInstanceId, String> {
    let names_by_ssn: HashMap<&Ssn, &str> = persons
        .iter()
        .map(|person| (&person.ssn, person.name.as_str()))
        .collect();

    let mut result = HashMap::new();
    for registration in registrations
        .iter()
        .filter(|registration| registration.r#type == TeacherType::MainTeacher)
    {
        result
            .entry(registration.course_instance_id)
            .or_insert_with(|| {
                names_by_ssn
                    .get(&registration.ssn)
                    .map(|name| (*name).to_owned())
                    .unwrap_or_default()
            });
    }

    result
}

pub(super) fn course_instance_to_dto(
    instance: &CourseInstance,
    template: &CourseTemplate,
    language: CourseLanguage,
    main_teachers: &HashMap<CourseInstanceId, String>,
) -> CourseInstanceResponseDTO {
    CourseInstanceResponseDTO {
        course_instance_id: instance.id,
        template_id: template.course_id.to_owned(),
        name: localized_name(template, language),
        main_teacher: main_teachers
            .get(&instance.id)
            .cloned()
            .unwrap_or_default(),
    }
}

pub(super) fn registration_from_request(
    course_instance_id: CourseInstanceId,
    ssn: Ssn,
    r#type: TeacherType,
) -> TeacherRegistration {
    TeacherRegistration {
        id: None,
        course_instance_id,
        ssn,
        r#type,
    }
}
