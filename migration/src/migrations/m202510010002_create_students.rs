use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010002_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("first_name")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("email")).string_len(150).not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("phone")).string_len(15).null())
                    .col(ColumnDef::new(Alias::new("date_of_birth")).date().null())
                    .col(ColumnDef::new(Alias::new("enrollment_date")).date().not_null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("student_status"),
                                vec![
                                    Alias::new("active"),
                                    Alias::new("inactive"),
                                    Alias::new("graduated"),
                                ],
                            )
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}
