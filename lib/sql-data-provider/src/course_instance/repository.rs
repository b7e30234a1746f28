use courses_core::model::course_instance::CourseInstance;
use courses_core::repository::entity_repository::Repository;
use courses_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{DatabaseTransaction, EntityTrait, QueryOrder};

use super::CourseInstanceProvider;
use crate::entity::course_instance;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl Repository<CourseInstance> for CourseInstanceProvider {
    async fn all(&self) -> Result<Vec<CourseInstance>, DataLayerError> {
        let instances = course_instance::Entity::find()
            .order_by_asc(course_instance::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(instances))
    }

    async fn add(&self, entity: CourseInstance) -> Result<(), DataLayerError> {
        self.staged.push(entity);
        Ok(())
    }
}

impl CourseInstanceProvider {
    pub(crate) async fn insert_staged(
        txn: &DatabaseTransaction,
        entities: Vec<CourseInstance>,
    ) -> Result<(), DataLayerError> {
        for entity in entities {
            course_instance::Entity::insert(course_instance::ActiveModel::from(entity))
            .exec(txn)
            .await
            .map_err(to_data_layer_error)?;
        }

        Ok(())
    }
}
