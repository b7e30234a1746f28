use std::collections::HashMap;

use shared_types::{CourseId, CourseInstanceId};

use super::CourseService;
use super::dto::{
    AddTeacherRequestDTO, CourseLanguage, GetCourseInstanceListResponseDTO, PersonResponseDTO,
};
use super::mapper::{course_instance_to_dto, main_teachers_by_course, registration_from_request};
use super::validator::validate_new_registration;
use crate::common_mapper::paginate;
use crate::model::course_template::CourseTemplate;
use crate::model::list_query::ListPagination;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl CourseService {
    /// Lists the course instances of a semester, one page at a time.
    ///
    /// # Arguments
    ///
    /// * `language_hint` - free text (usually `Accept-Language`) selecting the title language
    /// * `semester` - semester id, the configured default semester when missing or empty
    /// * `page` - 1-based page, out of range values resolve to the first page
    pub async fn get_course_instances_by_semester(
        &self,
        language_hint: &str,
        semester: Option<String>,
        page: i64,
    ) -> Result<GetCourseInstanceListResponseDTO, ServiceError> {
        let language =
            CourseLanguage::from_hint(language_hint, &self.config.english_language_marker);
        let semester = semester
            .filter(|semester| !semester.is_empty())
            .unwrap_or_else(|| self.config.default_semester.to_owned());

        let instances = self.course_instances.all().await?;
        let templates = self.course_templates.all().await?;
        let registrations = self.teacher_registrations.all().await?;
        let persons = self.persons.all().await?;

        let templates_by_id: HashMap<&CourseId, &CourseTemplate> = templates
            .iter()
            .map(|template| (&template.course_id, template))
            .collect();
        let main_teachers = main_teachers_by_course(&registrations, &persons);

        let courses: Vec<_> = instances
            .iter()
            .filter(|instance| instance.semester_id == semester)
            .filter_map(|instance| {
                templates_by_id.get(&instance.course_id).map(|template| {
                    course_instance_to_dto(instance, template, language, &main_teachers)
                })
            })
            .collect();

        tracing::debug!(
            "Found {} course instance(s) in semester {semester}",
            courses.len()
        );

        Ok(paginate(
            courses,
            ListPagination {
                page,
                page_size: self.config.page_size,
            },
        ))
    }

    /// Registers a person as a teacher of a course instance.
    ///
    /// Fails without side effects if the course instance or person does not exist, if a second
    /// main teacher is requested, or if the person already teaches the course.
    pub async fn add_teacher_to_course(
        &self,
        course_instance_id: CourseInstanceId,
        request: AddTeacherRequestDTO,
    ) -> Result<PersonResponseDTO, ServiceError> {
        let _guard = self.write_lock.lock().await;

        self.course_instances
            .all()
            .await?
            .into_iter()
            .find(|instance| instance.id == course_instance_id)
            .ok_or(EntityNotFoundError::CourseInstance(course_instance_id))?;

        let person = self
            .persons
            .all()
            .await?
            .into_iter()
            .find(|person| person.ssn == request.ssn)
            .ok_or_else(|| EntityNotFoundError::Person(request.ssn.to_owned()))?;

        let registrations = self.teacher_registrations.all().await?;
        if let Err(error) = validate_new_registration(course_instance_id, &request, &registrations)
        {
            tracing::warn!(
                "Rejected registration of {} in course instance {course_instance_id}: {error}",
                request.ssn
            );
            return Err(error.into());
        }

        let AddTeacherRequestDTO { ssn, r#type } = request;
        self.teacher_registrations
            .add(registration_from_request(course_instance_id, ssn, r#type))
            .await?;

        self.unit_of_work.save().await.map_err(|error| match error {
            DataLayerError::AlreadyExists => {
                BusinessLogicError::PersonAlreadyRegisteredTeacherInCourse.into()
            }
            error => ServiceError::from(error),
        })?;

        tracing::info!(
            "Registered {} as {} in course instance {course_instance_id}",
            person.ssn,
            r#type
        );

        Ok(person.into())
    }
}
