use sea_orm::{
    Condition, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    Customer, CustomerNewCmd, CustomerUpdateCmd, EngineError, ResultEngine, customers, orders,
    tasks,
    util::{normalize_optional_text, normalize_required_text},
};

use super::{DateRange, Engine, today, with_tx};

/// Filters for listing customers.
#[derive(Clone, Debug, Default)]
pub struct CustomerListFilter {
    /// Case-insensitive substring match over name/email/phone.
    pub search: Option<String>,
    pub range: DateRange,
}

pub(crate) async fn ensure_customer_exists<C: ConnectionTrait>(
    conn: &C,
    customer_id: Uuid,
) -> ResultEngine<()> {
    customers::Entity::find_by_id(customer_id.to_string())
        .one(conn)
        .await?
        .map(|_| ())
        .ok_or_else(|| EngineError::KeyNotFound("customer not exists".to_string()))
}

impl Engine {
    /// Create a customer record.
    pub async fn new_customer(&self, cmd: CustomerNewCmd) -> ResultEngine<Customer> {
        let name = normalize_required_text(&cmd.name, "customer name")?;

        let mut customer = Customer::new(name, cmd.created_at.unwrap_or_else(today));
        customer.email = normalize_optional_text(cmd.email.as_deref());
        customer.phone = normalize_optional_text(cmd.phone.as_deref());
        customer.city = normalize_optional_text(cmd.city.as_deref());
        customer.country = normalize_optional_text(cmd.country.as_deref());
        customer.platform_customer_id = normalize_optional_text(cmd.platform_customer_id.as_deref());
        customer.note = normalize_optional_text(cmd.note.as_deref());

        customers::ActiveModel::from(&customer)
            .insert(&self.database)
            .await?;
        Ok(customer)
    }

    /// Return a customer by id.
    pub async fn customer(&self, customer_id: Uuid) -> ResultEngine<Customer> {
        let model = customers::Entity::find_by_id(customer_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("customer not exists".to_string()))?;
        Customer::try_from(model)
    }

    /// List customers, newest first.
    pub async fn list_customers(&self, filter: &CustomerListFilter) -> ResultEngine<Vec<Customer>> {
        let mut query = customers::Entity::find();

        if let Some(search) = normalize_optional_text(filter.search.as_deref()) {
            query = query.filter(
                Condition::any()
                    .add(customers::Column::Name.contains(&search))
                    .add(customers::Column::Email.contains(&search))
                    .add(customers::Column::Phone.contains(&search)),
            );
        }
        if let Some(start) = filter.range.start {
            query = query.filter(customers::Column::CreatedAt.gte(start));
        }
        if let Some(end) = filter.range.end {
            query = query.filter(customers::Column::CreatedAt.lte(end));
        }

        let models = query
            .order_by_desc(customers::Column::CreatedAt)
            .all(&self.database)
            .await?;
        models.into_iter().map(Customer::try_from).collect()
    }

    /// Update a customer record. Absent fields keep their stored value.
    pub async fn update_customer(&self, cmd: CustomerUpdateCmd) -> ResultEngine<Customer> {
        let model = customers::Entity::find_by_id(cmd.id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("customer not exists".to_string()))?;
        let mut customer = Customer::try_from(model)?;

        if let Some(name) = cmd.name.as_deref() {
            customer.name = normalize_required_text(name, "customer name")?;
        }
        if let Some(email) = cmd.email.as_deref() {
            customer.email = normalize_optional_text(Some(email));
        }
        if let Some(phone) = cmd.phone.as_deref() {
            customer.phone = normalize_optional_text(Some(phone));
        }
        if let Some(city) = cmd.city.as_deref() {
            customer.city = normalize_optional_text(Some(city));
        }
        if let Some(country) = cmd.country.as_deref() {
            customer.country = normalize_optional_text(Some(country));
        }
        if let Some(platform_id) = cmd.platform_customer_id.as_deref() {
            customer.platform_customer_id = normalize_optional_text(Some(platform_id));
        }
        if let Some(note) = cmd.note.as_deref() {
            customer.note = normalize_optional_text(Some(note));
        }
        if let Some(created_at) = cmd.created_at {
            customer.created_at = created_at;
        }

        customers::ActiveModel::from(&customer)
            .update(&self.database)
            .await?;
        Ok(customer)
    }

    /// Delete a customer.
    ///
    /// Orders and tasks pointing at the customer keep existing with their
    /// reference set to NULL, in the same DB transaction.
    pub async fn delete_customer(&self, customer_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = customers::Entity::find_by_id(customer_id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("customer not exists".to_string()))?;

            orders::Entity::update_many()
                .col_expr(orders::Column::CustomerId, Expr::value(Option::<String>::None))
                .filter(orders::Column::CustomerId.eq(customer_id.to_string()))
                .exec(&db_tx)
                .await?;
            tasks::Entity::update_many()
                .col_expr(tasks::Column::CustomerId, Expr::value(Option::<String>::None))
                .filter(tasks::Column::CustomerId.eq(customer_id.to_string()))
                .exec(&db_tx)
                .await?;

            customers::Entity::delete_by_id(model.id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
