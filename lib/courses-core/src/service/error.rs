use shared_types::{CourseId, CourseInstanceId, Ssn};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Course instance `{0}` not found")]
    CourseInstance(CourseInstanceId),

    #[error("Person `{0}` not found")]
    Person(Ssn),
}

/// Registration rules. The message of each variant is also its public error code.
#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("COURSE_ALREADY_HAS_A_MAIN_TEACHER")]
    CourseAlreadyHasMainTeacher,

    #[error("PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE")]
    PersonAlreadyRegisteredTeacherInCourse,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Seed data references unknown course template `{0}`")]
    UnknownCourseTemplate(CourseId),

    #[error("Seed data references unknown course instance `{0}`")]
    UnknownCourseInstance(CourseInstanceId),

    #[error("Seed data references unknown person `{0}`")]
    UnknownPerson(Ssn),

    #[error("Seed data contains more than one main teacher for course instance `{0}`")]
    DuplicateMainTeacher(CourseInstanceId),

    #[error("Seed data registers person `{ssn}` more than once in course instance `{course_instance_id}`")]
    DuplicateRegistration {
        course_instance_id: CourseInstanceId,
        ssn: Ssn,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,

    COURSE_ALREADY_HAS_A_MAIN_TEACHER,
    PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Course instance not found",
            ErrorCode::BR_0002 => "Person not found",
            ErrorCode::BR_0003 => "General input validation error",
            ErrorCode::BR_0004 => "Database error",
            ErrorCode::BR_0005 => "Invalid seed data",

            ErrorCode::COURSE_ALREADY_HAS_A_MAIN_TEACHER => "COURSE_ALREADY_HAS_A_MAIN_TEACHER",
            ErrorCode::PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE => {
                "PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE"
            }
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::CourseInstance(_) => ErrorCode::BR_0001,
            EntityNotFoundError::Person(_) => ErrorCode::BR_0002,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::CourseAlreadyHasMainTeacher => {
                ErrorCode::COURSE_ALREADY_HAS_A_MAIN_TEACHER
            }
            BusinessLogicError::PersonAlreadyRegisteredTeacherInCourse => {
                ErrorCode::PERSON_ALREADY_REGISTERED_TEACHER_IN_COURSE
            }
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::BR_0005
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        ServiceError::Repository(value)
    }
}
