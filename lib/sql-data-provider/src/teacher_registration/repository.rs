use courses_core::model::teacher_registration::TeacherRegistration;
use courses_core::repository::entity_repository::Repository;
use courses_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{DatabaseTransaction, EntityTrait, QueryOrder};

use super::TeacherRegistrationProvider;
use crate::entity::teacher_registration;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl Repository<TeacherRegistration> for TeacherRegistrationProvider {
    async fn all(&self) -> Result<Vec<TeacherRegistration>, DataLayerError> {
        let registrations = teacher_registration::Entity::find()
            .order_by_asc(teacher_registration::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(registrations))
    }

    async fn add(&self, entity: TeacherRegistration) -> Result<(), DataLayerError> {
        self.staged.push(entity);
        Ok(())
    }
}

impl TeacherRegistrationProvider {
    pub(crate) async fn insert_staged(
        txn: &DatabaseTransaction,
        entities: Vec<TeacherRegistration>,
    ) -> Result<(), DataLayerError> {
        for entity in entities {
            teacher_registration::Entity::insert(teacher_registration::ActiveModel::from(entity))
                .exec(txn)
                .await
                .map_err(to_data_layer_error)?;
        }

        Ok(())
    }
}
