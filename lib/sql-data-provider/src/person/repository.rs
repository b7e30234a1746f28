use courses_core::model::person::Person;
use courses_core::repository::entity_repository::Repository;
use courses_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{DatabaseTransaction, EntityTrait, QueryOrder};

use super::PersonProvider;
use crate::entity::person;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl Repository<Person> for PersonProvider {
    async fn all(&self) -> Result<Vec<Person>, DataLayerError> {
        let persons = person::Entity::find()
            .order_by_asc(person::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(persons))
    }

    async fn add(&self, entity: Person) -> Result<(), DataLayerError> {
        self.staged.push(entity);
        Ok(())
    }
}

impl PersonProvider {
    pub(crate) async fn insert_staged(
        txn: &DatabaseTransaction,
        entities: Vec<Person>,
    ) -> Result<(), DataLayerError> {
        for entity in entities {
            person::Entity::insert(person::ActiveModel::from(entity))
                .exec(txn)
                .await
                .map_err(to_data_layer_error)?;
        }

        Ok(())
    }
}
