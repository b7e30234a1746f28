use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use repository::unit_of_work::UnitOfWork;
use service::course::CourseService;
use service::seed::SeedService;
use tokio::sync::Mutex;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;

mod common_mapper;

#[derive(Clone)]
pub struct CoursesCore {
    pub course_service: CourseService,
    pub seed_service: SeedService,
    pub config: Arc<CoreConfig>,
}

impl CoursesCore {
    pub fn new(
        data_provider: Arc<dyn UnitOfWork>,
        config: CoreConfig,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;

        let config = Arc::new(config);
        let write_lock = Arc::new(Mutex::new(()));

        Ok(Self {
            course_service: CourseService::new(
                data_provider.clone(),
                Arc::new(config.courses.to_owned()),
                write_lock.clone(),
            ),
            seed_service: SeedService::new(data_provider, write_lock),
            config,
        })
    }

    pub fn version() -> Version {
        Version {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

pub struct Version {
    pub name: String,
    pub version: String,
}
