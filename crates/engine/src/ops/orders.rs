use sea_orm::{Condition, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    Currency, EngineError, Order, OrderNewCmd, OrderUpdateCmd, ResultEngine, orders,
    util::{normalize_optional_text, normalize_required_text},
};

use super::{DateRange, Engine, customers::ensure_customer_exists, today};

/// Filters for listing orders.
#[derive(Clone, Debug, Default)]
pub struct OrderListFilter {
    /// Case-insensitive substring match over order_number/sales_channel.
    pub search: Option<String>,
    pub range: DateRange,
}

impl Engine {
    /// Create an order record.
    pub async fn new_order(&self, cmd: OrderNewCmd) -> ResultEngine<Order> {
        let order_number = normalize_required_text(&cmd.order_number, "order number")?;
        if let Some(customer_id) = cmd.customer_id {
            ensure_customer_exists(&self.database, customer_id).await?;
        }

        let mut order = Order::new(
            order_number,
            cmd.amount_minor,
            cmd.currency.unwrap_or(Currency::Usd),
            cmd.order_date.unwrap_or_else(today),
        )?;
        order.customer_id = cmd.customer_id;
        if let Some(payment_status) = cmd.payment_status {
            order.payment_status = payment_status;
        }
        if let Some(fulfillment_status) = cmd.fulfillment_status {
            order.fulfillment_status = fulfillment_status;
        }
        order.sales_channel = normalize_optional_text(cmd.sales_channel.as_deref());
        order.note = normalize_optional_text(cmd.note.as_deref());

        orders::ActiveModel::from(&order)
            .insert(&self.database)
            .await?;
        Ok(order)
    }

    /// Return an order by id.
    pub async fn order(&self, order_id: Uuid) -> ResultEngine<Order> {
        let model = orders::Entity::find_by_id(order_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("order not exists".to_string()))?;
        Order::try_from(model)
    }

    /// List orders, newest first.
    pub async fn list_orders(&self, filter: &OrderListFilter) -> ResultEngine<Vec<Order>> {
        let mut query = orders::Entity::find();

        if let Some(search) = normalize_optional_text(filter.search.as_deref()) {
            query = query.filter(
                Condition::any()
                    .add(orders::Column::OrderNumber.contains(&search))
                    .add(orders::Column::SalesChannel.contains(&search)),
            );
        }
        if let Some(start) = filter.range.start {
            query = query.filter(orders::Column::OrderDate.gte(start));
        }
        if let Some(end) = filter.range.end {
            query = query.filter(orders::Column::OrderDate.lte(end));
        }

        let models = query
            .order_by_desc(orders::Column::OrderDate)
            .all(&self.database)
            .await?;
        models.into_iter().map(Order::try_from).collect()
    }

    /// Update an order record. Absent fields keep their stored value.
    pub async fn update_order(&self, cmd: OrderUpdateCmd) -> ResultEngine<Order> {
        let model = orders::Entity::find_by_id(cmd.id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("order not exists".to_string()))?;
        let mut order = Order::try_from(model)?;

        if let Some(order_number) = cmd.order_number.as_deref() {
            order.order_number = normalize_required_text(order_number, "order number")?;
        }
        if let Some(amount_minor) = cmd.amount_minor {
            if amount_minor < 0 {
                return Err(EngineError::InvalidAmount(
                    "amount_minor must be >= 0".to_string(),
                ));
            }
            order.amount_minor = amount_minor;
        }
        if let Some(customer_id) = cmd.customer_id {
            ensure_customer_exists(&self.database, customer_id).await?;
            order.customer_id = Some(customer_id);
        }
        if let Some(order_date) = cmd.order_date {
            order.order_date = order_date;
        }
        if let Some(currency) = cmd.currency {
            order.currency = currency;
        }
        if let Some(payment_status) = cmd.payment_status {
            order.payment_status = payment_status;
        }
        if let Some(fulfillment_status) = cmd.fulfillment_status {
            order.fulfillment_status = fulfillment_status;
        }
        if let Some(sales_channel) = cmd.sales_channel.as_deref() {
            order.sales_channel = normalize_optional_text(Some(sales_channel));
        }
        if let Some(note) = cmd.note.as_deref() {
            order.note = normalize_optional_text(Some(note));
        }

        orders::ActiveModel::from(&order)
            .update(&self.database)
            .await?;
        Ok(order)
    }

    /// Delete an order.
    pub async fn delete_order(&self, order_id: Uuid) -> ResultEngine<()> {
        let result = orders::Entity::delete_by_id(order_id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("order not exists".to_string()));
        }
        Ok(())
    }
}
