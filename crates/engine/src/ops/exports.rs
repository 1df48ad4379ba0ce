//! Filtered reads backing the spreadsheet exports.
//!
//! Exports are plain reads: the same date-range filters as the listings, but
//! ordered date ascending so the file reads chronologically. Serialization to
//! CSV happens at the HTTP layer.

use std::collections::HashMap;

use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    Customer, Entry, EntryKind, Order, ResultEngine, Task, TaskStatus, customers, entries, orders,
    tasks, util::parse_uuid,
};

use super::{DateRange, Engine};

impl Engine {
    /// Customers whose creation date falls inside the inclusive range.
    pub async fn export_customers(&self, range: DateRange) -> ResultEngine<Vec<Customer>> {
        let mut query = customers::Entity::find();
        if let Some(start) = range.start {
            query = query.filter(customers::Column::CreatedAt.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(customers::Column::CreatedAt.lte(end));
        }
        let models = query
            .order_by_asc(customers::Column::CreatedAt)
            .all(&self.database)
            .await?;
        models.into_iter().map(Customer::try_from).collect()
    }

    /// Orders in range, plus an id → name map for the display-only customer
    /// column.
    pub async fn export_orders(
        &self,
        range: DateRange,
    ) -> ResultEngine<(Vec<Order>, HashMap<Uuid, String>)> {
        let mut query = orders::Entity::find();
        if let Some(start) = range.start {
            query = query.filter(orders::Column::OrderDate.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(orders::Column::OrderDate.lte(end));
        }
        let models = query
            .order_by_asc(orders::Column::OrderDate)
            .all(&self.database)
            .await?;
        let orders = models
            .into_iter()
            .map(Order::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        let names = self.customer_name_map().await?;
        Ok((orders, names))
    }

    /// Ledger entries in range, optionally restricted to one kind.
    pub async fn export_entries(
        &self,
        range: DateRange,
        kind: Option<EntryKind>,
    ) -> ResultEngine<Vec<Entry>> {
        let mut query = entries::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(entries::Column::Kind.eq(kind.as_str()));
        }
        if let Some(start) = range.start {
            query = query.filter(entries::Column::Date.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(entries::Column::Date.lte(end));
        }
        let models = query
            .order_by_asc(entries::Column::Date)
            .all(&self.database)
            .await?;
        models.into_iter().map(Entry::try_from).collect()
    }

    /// Tasks in range, optionally restricted to one status, plus the customer
    /// name map.
    pub async fn export_tasks(
        &self,
        range: DateRange,
        status: Option<TaskStatus>,
    ) -> ResultEngine<(Vec<Task>, HashMap<Uuid, String>)> {
        let mut query = tasks::Entity::find();
        if let Some(status) = status {
            query = query.filter(tasks::Column::Status.eq(status.as_str()));
        }
        if let Some(start) = range.start {
            query = query.filter(tasks::Column::Date.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(tasks::Column::Date.lte(end));
        }
        let models = query
            .order_by_asc(tasks::Column::Date)
            .all(&self.database)
            .await?;
        let tasks = models
            .into_iter()
            .map(Task::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        let names = self.customer_name_map().await?;
        Ok((tasks, names))
    }

    async fn customer_name_map(&self) -> ResultEngine<HashMap<Uuid, String>> {
        let models = customers::Entity::find().all(&self.database).await?;
        let mut map = HashMap::with_capacity(models.len());
        for model in models {
            map.insert(parse_uuid(&model.id, "customer")?, model.name);
        }
        Ok(map)
    }
}
