use sea_orm_migration::prelude::*;

use super::m20260604_091500_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Tasks {
    Table,
    Id,
    CustomerId,
    Date,
    Title,
    Status,
    Priority,
    Note,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::CustomerId).string())
                    .col(ColumnDef::new(Tasks::Date).date().not_null())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Status).string().not_null())
                    .col(ColumnDef::new(Tasks::Priority).string())
                    .col(ColumnDef::new(Tasks::Note).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tasks-customer_id")
                            .from(Tasks::Table, Tasks::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tasks-date")
                    .table(Tasks::Table)
                    .col(Tasks::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}
