pub use sea_orm_migration::prelude::*;

mod m20260604_090000_operators;
mod m20260604_091500_customers;
mod m20260605_100000_orders;
mod m20260605_103000_entries;
mod m20260606_084500_tasks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260604_090000_operators::Migration),
            Box::new(m20260604_091500_customers::Migration),
            Box::new(m20260605_100000_orders::Migration),
            Box::new(m20260605_103000_entries::Migration),
            Box::new(m20260606_084500_tasks::Migration),
        ]
    }
}
