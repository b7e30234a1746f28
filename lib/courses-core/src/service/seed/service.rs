use super::SeedService;
use super::dto::{SeedDataDTO, SeedResultDTO};
use super::validator::validate_seed_data;
use crate::service::error::ServiceError;

impl SeedService {
    /// Loads `seed` in a single commit.
    ///
    /// The store is only seeded while it holds no persons and no course instances, otherwise
    /// nothing is written and an empty result is returned.
    pub async fn load_seed_data(&self, seed: SeedDataDTO) -> Result<SeedResultDTO, ServiceError> {
        validate_seed_data(&seed)?;

        let _guard = self.write_lock.lock().await;

        let persons = self.unit_of_work.persons();
        let course_instances = self.unit_of_work.course_instances();
        if !persons.all().await?.is_empty() || !course_instances.all().await?.is_empty() {
            tracing::info!("Store already populated, skipping seed data");
            return Ok(SeedResultDTO::default());
        }

        let course_templates = self.unit_of_work.course_templates();
        let teacher_registrations = self.unit_of_work.teacher_registrations();

        let result = SeedResultDTO {
            persons: seed.persons.len(),
            course_templates: seed.course_templates.len(),
            course_instances: seed.course_instances.len(),
            teacher_registrations: seed.teacher_registrations.len(),
        };

        for person in seed.persons {
            persons.add(person.into()).await?;
        }
        for template in seed.course_templates {
            course_templates.add(template.into()).await?;
        }
        for instance in seed.course_instances {
            course_instances.add(instance.into()).await?;
        }
        for registration in seed.teacher_registrations {
            teacher_registrations.add(registration.into()).await?;
        }

        self.unit_of_work.save().await?;

        tracing::info!("Seed data loaded: {result:?}");

        Ok(result)
    }
}
