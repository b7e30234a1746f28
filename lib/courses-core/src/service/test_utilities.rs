use std::sync::Arc;

use crate::config::core_config::CoursesConfig;
use crate::model::course_instance::CourseInstance;
use crate::model::course_template::CourseTemplate;
use crate::model::person::Person;
use crate::model::teacher_registration::{TeacherRegistration, TeacherType};
use crate::repository::entity_repository::{MockRepository, Repository};
use crate::repository::unit_of_work::MockUnitOfWork;

pub const SSN_DABS: &str = "1203735289";
pub const SSN_GUNNA: &str = "1234567890";
pub const INVALID_SSN: &str = "9876543210";

pub const NAME_DABS: &str = "Daníel B. Sigurgeirsson";
pub const NAME_GUNNA: &str = "Guðrún Guðmundsdóttir";

pub const COURSEID_VEFT_20153: i32 = 1337;
pub const COURSEID_VEFT_20163: i32 = 1338;
pub const INVALID_COURSEID: i32 = 9999;

pub fn dummy_persons() -> Vec<Person> {
    vec![
        Person {
            id: 1.into(),
            ssn: SSN_DABS.into(),
            name: NAME_DABS.to_owned(),
            email: "dabs@ru.is".to_owned(),
        },
        Person {
            id: 2.into(),
            ssn: SSN_GUNNA.into(),
            name: NAME_GUNNA.to_owned(),
            email: "gunna@ru.is".to_owned(),
        },
    ]
}

pub fn dummy_course_templates() -> Vec<CourseTemplate> {
    vec![CourseTemplate {
        course_id: "T-514-VEFT".into(),
        name: "Vefþjónustur".to_owned(),
        name_en: "Web Services".to_owned(),
        description: "Í þessum áfanga verður fjallað um vefþjónustur".to_owned(),
    }]
}

pub fn dummy_course_instances() -> Vec<CourseInstance> {
    vec![
        CourseInstance {
            id: COURSEID_VEFT_20153.into(),
            course_id: "T-514-VEFT".into(),
            semester_id: "20153".to_owned(),
        },
        CourseInstance {
            id: COURSEID_VEFT_20163.into(),
            course_id: "T-514-VEFT".into(),
            semester_id: "20163".to_owned(),
        },
    ]
}

pub fn dummy_teacher_registrations() -> Vec<TeacherRegistration> {
    vec![TeacherRegistration {
        id: Some(101.into()),
        course_instance_id: COURSEID_VEFT_20153.into(),
        ssn: SSN_DABS.into(),
        r#type: TeacherType::MainTeacher,
    }]
}

pub fn generic_courses_config() -> Arc<CoursesConfig> {
    Arc::new(CoursesConfig::default())
}

/// Repository mock returning `entities` on every [`Repository::all`] call.
pub fn repository_returning<T: Clone + Send + Sync + 'static>(
    entities: Vec<T>,
) -> MockRepository<T> {
    let mut repository = MockRepository::default();
    repository
        .expect_all()
        .returning(move || Ok(entities.clone()));
    repository
}

#[derive(Default)]
pub struct Repositories {
    pub persons: MockRepository<Person>,
    pub course_templates: MockRepository<CourseTemplate>,
    pub course_instances: MockRepository<CourseInstance>,
    pub teacher_registrations: MockRepository<TeacherRegistration>,
}

impl Repositories {
    pub fn with_fixture() -> Self {
        Self {
            persons: repository_returning(dummy_persons()),
            course_templates: repository_returning(dummy_course_templates()),
            course_instances: repository_returning(dummy_course_instances()),
            teacher_registrations: repository_returning(dummy_teacher_registrations()),
        }
    }

    /// Wires the repositories into `unit_of_work`, which keeps its own `save` expectations.
    pub fn into_unit_of_work(self, mut unit_of_work: MockUnitOfWork) -> MockUnitOfWork {
        let persons: Arc<dyn Repository<Person>> = Arc::new(self.persons);
        let course_templates: Arc<dyn Repository<CourseTemplate>> =
            Arc::new(self.course_templates);
        let course_instances: Arc<dyn Repository<CourseInstance>> =
            Arc::new(self.course_instances);
        let teacher_registrations: Arc<dyn Repository<TeacherRegistration>> =
            Arc::new(self.teacher_registrations);

        unit_of_work
            .expect_persons()
            .returning(move || persons.clone());
        unit_of_work
            .expect_course_templates()
            .returning(move || course_templates.clone());
        unit_of_work
            .expect_course_instances()
            .returning(move || course_instances.clone());
        unit_of_work
            .expect_teacher_registrations()
            .returning(move || teacher_registrations.clone());

        unit_of_work
    }
}
