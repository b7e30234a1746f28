use courses_core::model::course_template::CourseTemplate;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::CourseId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(CourseTemplate)]
#[sea_orm(table_name = "course_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: CourseId,
    pub name: String,
    pub name_en: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_instance::Entity")]
    CourseInstance,
}

impl Related<super::course_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
