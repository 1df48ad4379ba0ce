use sea_orm_migration::prelude::*;

use super::m20260604_091500_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Orders {
    Table,
    Id,
    CustomerId,
    OrderDate,
    OrderNumber,
    AmountMinor,
    Currency,
    PaymentStatus,
    FulfillmentStatus,
    SalesChannel,
    Note,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::CustomerId).string())
                    .col(ColumnDef::new(Orders::OrderDate).date().not_null())
                    .col(ColumnDef::new(Orders::OrderNumber).string().not_null())
                    .col(
                        ColumnDef::new(Orders::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orders::Currency).string().not_null())
                    .col(ColumnDef::new(Orders::PaymentStatus).string().not_null())
                    .col(
                        ColumnDef::new(Orders::FulfillmentStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orders::SalesChannel).string())
                    .col(ColumnDef::new(Orders::Note).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-orders-customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-orders-order_date")
                    .table(Orders::Table)
                    .col(Orders::OrderDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}
