use shared_types::CourseInstanceId;

use super::dto::AddTeacherRequestDTO;
use crate::model::teacher_registration::{TeacherRegistration, TeacherType};
use crate::service::error::BusinessLogicError;

/// Registration rules, checked in order against the committed registrations.
pub(super) fn validate_new_registration(
    course_instance_id: CourseInstanceId,
    request: &AddTeacherRequestDTO,
    registrations: &[TeacherRegistration],
) -> Result<(), BusinessLogicError> {
    let mut course_registrations = registrations
        .iter()
        .filter(|registration| registration.course_instance_id == course_instance_id);

    if request.r#type == TeacherType::MainTeacher
        && course_registrations
            .clone()
            .any(|registration| registration.r#type == TeacherType::MainTeacher)
    {
        return Err(BusinessLogicError::CourseAlreadyHasMainTeacher);
    }

    if course_registrations.any(|registration| registration.ssn == request.ssn) {
        return Err(BusinessLogicError::PersonAlreadyRegisteredTeacherInCourse);
    }

    Ok(())
}
