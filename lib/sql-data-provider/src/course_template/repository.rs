use courses_core::model::course_template::CourseTemplate;
use courses_core::repository::entity_repository::Repository;
use courses_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{DatabaseTransaction, EntityTrait, QueryOrder};

use super::CourseTemplateProvider;
use crate::entity::course_template;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl Repository<CourseTemplate> for CourseTemplateProvider {
    async fn all(&self) -> Result<Vec<CourseTemplate>, DataLayerError> {
        let templates = course_template::Entity::find()
            .order_by_asc(course_template::Column::CourseId)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(templates))
    }

    async fn add(&self, entity: CourseTemplate) -> Result<(), DataLayerError> {
        self.staged.push(entity);
        Ok(())
    }
}

impl CourseTemplateProvider {
    pub(crate) async fn insert_staged(
        txn: &DatabaseTransaction,
        entities: Vec<CourseTemplate>,
    ) -> Result<(), DataLayerError> {
        for entity in entities {
            course_template::Entity::insert(course_template::ActiveModel::from(entity))
            .exec(txn)
            .await
            .map_err(to_data_layer_error)?;
        }

        Ok(())
    }
}
