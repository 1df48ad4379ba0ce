use sea_orm::{PaginatorTrait, QueryFilter, Statement, prelude::*};

use crate::{EntryKind, ResultEngine, TaskStatus, customers, orders, tasks};

use super::Engine;

/// Dashboard totals across all four record tables.
///
/// Monetary fields are minor units; `net_minor` is income minus expenses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub customers: u64,
    pub orders: u64,
    pub income_minor: i64,
    pub expense_minor: i64,
    pub net_minor: i64,
    pub open_tasks: u64,
}

impl Engine {
    /// Compute dashboard totals.
    pub async fn totals(&self) -> ResultEngine<Totals> {
        let customers = customers::Entity::find().count(&self.database).await?;
        let orders = orders::Entity::find().count(&self.database).await?;
        let income_minor = self.sum_entries(EntryKind::Income).await?;
        let expense_minor = self.sum_entries(EntryKind::Expense).await?;
        let open_tasks = tasks::Entity::find()
            .filter(tasks::Column::Status.ne(TaskStatus::Done.as_str()))
            .count(&self.database)
            .await?;

        Ok(Totals {
            customers,
            orders,
            income_minor,
            expense_minor,
            net_minor: income_minor - expense_minor,
            open_tasks,
        })
    }

    async fn sum_entries(&self, kind: EntryKind) -> ResultEngine<i64> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT COALESCE(SUM(amount_minor), 0) AS sum FROM entries WHERE kind = ?",
            vec![kind.as_str().into()],
        );
        let row = self.database.query_one(stmt).await?;
        Ok(row.and_then(|r| r.try_get("", "sum").ok()).unwrap_or(0))
    }
}
