use sea_orm_migration::prelude::*;

const UNIQUE_PERSON_SSN_INDEX: &str = "index-Person-Ssn-Unique";
const UNIQUE_TEACHER_REGISTRATION_INDEX: &str =
    "index-TeacherRegistration-CourseInstanceId-Ssn-Unique";
const COURSE_INSTANCE_SEMESTER_INDEX: &str = "index-CourseInstance-SemesterId";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .col(
                        ColumnDef::new(Person::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Person::Ssn).string().not_null())
                    .col(ColumnDef::new(Person::Name).string().not_null())
                    .col(ColumnDef::new(Person::Email).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_PERSON_SSN_INDEX)
                    .unique()
                    .table(Person::Table)
                    .col(Person::Ssn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseTemplate::Table)
                    .col(
                        ColumnDef::new(CourseTemplate::CourseId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseTemplate::Name).string().not_null())
                    .col(ColumnDef::new(CourseTemplate::NameEn).string().not_null())
                    .col(
                        ColumnDef::new(CourseTemplate::Description)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseInstance::Table)
                    .col(
                        ColumnDef::new(CourseInstance::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseInstance::CourseId).string().not_null())
                    .col(
                        ColumnDef::new(CourseInstance::SemesterId)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-CourseInstance-CourseId")
                            .from_tbl(CourseInstance::Table)
                            .from_col(CourseInstance::CourseId)
                            .to_tbl(CourseTemplate::Table)
                            .to_col(CourseTemplate::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(COURSE_INSTANCE_SEMESTER_INDEX)
                    .table(CourseInstance::Table)
                    .col(CourseInstance::SemesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeacherRegistration::Table)
                    .col(
                        ColumnDef::new(TeacherRegistration::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherRegistration::CourseInstanceId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherRegistration::Ssn).string().not_null())
                    .col(
                        ColumnDef::new(TeacherRegistration::Type)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TeacherRegistration-CourseInstanceId")
                            .from_tbl(TeacherRegistration::Table)
                            .from_col(TeacherRegistration::CourseInstanceId)
                            .to_tbl(CourseInstance::Table)
                            .to_col(CourseInstance::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-TeacherRegistration-Ssn")
                            .from_tbl(TeacherRegistration::Table)
                            .from_col(TeacherRegistration::Ssn)
                            .to_tbl(Person::Table)
                            .to_col(Person::Ssn),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_TEACHER_REGISTRATION_INDEX)
                    .unique()
                    .table(TeacherRegistration::Table)
                    .col(TeacherRegistration::CourseInstanceId)
                    .col(TeacherRegistration::Ssn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherRegistration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseInstance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTemplate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Person {
    Table,
    Id,
    Ssn,
    Name,
    Email,
}

#[derive(DeriveIden)]
pub(crate) enum CourseTemplate {
    Table,
    CourseId,
    Name,
    NameEn,
    Description,
}

#[derive(DeriveIden)]
pub(crate) enum CourseInstance {
    Table,
    Id,
    CourseId,
    SemesterId,
}

#[derive(DeriveIden)]
pub(crate) enum TeacherRegistration {
    Table,
    Id,
    CourseInstanceId,
    Ssn,
    Type,
}
