use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::core_config::CoursesConfig;
use crate::model::course_instance::CourseInstance;
use crate::model::course_template::CourseTemplate;
use crate::model::person::Person;
use crate::model::teacher_registration::TeacherRegistration;
use crate::repository::entity_repository::Repository;
use crate::repository::unit_of_work::UnitOfWork;

pub mod dto;
pub mod mapper;
pub mod service;

mod validator;


#[derive(Clone)]
pub struct CourseService {
    unit_of_work: Arc<dyn UnitOfWork>,
    persons: Arc<dyn Repository<Person>>,
    course_templates: Arc<dyn Repository<CourseTemplate>>,
    course_instances: Arc<dyn Repository<CourseInstance>>,
    teacher_registrations: Arc<dyn Repository<TeacherRegistration>>,
    config: Arc<CoursesConfig>,
    /// Held across every check-stage-commit sequence on the unit of work
    write_lock: Arc<Mutex<()>>,
}

impl CourseService {
    pub fn new(
        unit_of_work: Arc<dyn UnitOfWork>,
        config: Arc<CoursesConfig>,
        write_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            persons: unit_of_work.persons(),
            course_templates: unit_of_work.course_templates(),
            course_instances: unit_of_work.course_instances(),
            teacher_registrations: unit_of_work.teacher_registrations(),
            unit_of_work,
            config,
            write_lock,
        }
    }
}
