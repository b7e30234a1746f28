use courses_core::model::person::Person;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{PersonId, Ssn};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(Person)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: PersonId,
    #[sea_orm(unique)]
    pub ssn: Ssn,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_registration::Entity")]
    TeacherRegistration,
}

impl Related<super::teacher_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
