use std::collections::HashSet;

use super::dto::{SeedDataDTO, SeedTeacherTypeDTO};
use crate::service::error::ValidationError;

/// Checks that the seed only references entities it defines itself and that the registrations
/// keep the one main teacher per course and one registration per person rules.
pub(super) fn validate_seed_data(seed: &SeedDataDTO) -> Result<(), ValidationError> {
    let course_ids: HashSet<_> = seed
        .course_templates
        .iter()
        .map(|template| &template.course_id)
        .collect();
    for instance in &seed.course_instances {
        if !course_ids.contains(&instance.course_id) {
            return Err(ValidationError::UnknownCourseTemplate(
                instance.course_id.to_owned(),
            ));
        }
    }

    let instance_ids: HashSet<_> = seed
        .course_instances
        .iter()
        .map(|instance| instance.id)
        .collect();
    let ssns: HashSet<_> = seed.persons.iter().map(|person| &person.ssn).collect();

    let mut main_teachers = HashSet::new();
    let mut registered = HashSet::new();
    for registration in &seed.teacher_registrations {
        if !instance_ids.contains(&registration.course_instance_id) {
            return Err(ValidationError::UnknownCourseInstance(
                registration.course_instance_id,
            ));
        }

        if !ssns.contains(&registration.ssn) {
            return Err(ValidationError::UnknownPerson(registration.ssn.to_owned()));
        }

        if matches!(registration.r#type, SeedTeacherTypeDTO::MainTeacher)
            && !main_teachers.insert(registration.course_instance_id)
        {
            return Err(ValidationError::DuplicateMainTeacher(
                registration.course_instance_id,
            ));
        }

        if !registered.insert((registration.course_instance_id, &registration.ssn)) {
            return Err(ValidationError::DuplicateRegistration {
                course_instance_id: registration.course_instance_id,
                ssn: registration.ssn.to_owned(),
            });
        }
    }

    Ok(())
}
