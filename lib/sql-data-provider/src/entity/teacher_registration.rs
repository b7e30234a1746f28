use courses_core::model::teacher_registration::TeacherType as ModelTeacherType;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{CourseInstanceId, Ssn, TeacherRegistrationId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: TeacherRegistrationId,
    pub course_instance_id: CourseInstanceId,
    pub ssn: Ssn,
    #[sea_orm(column_name = "type")]
    pub r#type: TeacherType,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(ModelTeacherType)]
#[into(ModelTeacherType)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TeacherType {
    #[sea_orm(num_value = 1)]
    MainTeacher,
    #[sea_orm(num_value = 2)]
    AssistantTeacher,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_instance::Entity",
        from = "Column::CourseInstanceId",
        to = "super::course_instance::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    CourseInstance,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::Ssn",
        to = "super::person::Column::Ssn",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Person,
}

impl Related<super::course_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstance.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
