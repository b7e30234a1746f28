use courses_core::model::course_instance::CourseInstance;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{CourseId, CourseInstanceId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(CourseInstance)]
#[sea_orm(table_name = "course_instance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: CourseInstanceId,
    pub course_id: CourseId,
    pub semester_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_template::Entity",
        from = "Column::CourseId",
        to = "super::course_template::Column::CourseId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    CourseTemplate,
    #[sea_orm(has_many = "super::teacher_registration::Entity")]
    TeacherRegistration,
}

impl Related<super::course_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTemplate.def()
    }
}

impl Related<super::teacher_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
