//! Order records.
//!
//! An `Order` tracks one sale: amount in minor units, payment and fulfillment
//! state, and an optional owning customer.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, EngineError, ResultEngine, util::parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            other => Err(EngineError::InvalidValue(format!(
                "invalid payment status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Unfulfilled,
    Partial,
    Fulfilled,
}

impl FulfillmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unfulfilled => "unfulfilled",
            Self::Partial => "partial",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl TryFrom<&str> for FulfillmentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "unfulfilled" => Ok(Self::Unfulfilled),
            "partial" => Ok(Self::Partial),
            "fulfilled" => Ok(Self::Fulfilled),
            other => Err(EngineError::InvalidValue(format!(
                "invalid fulfillment status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub order_date: NaiveDate,
    pub order_number: String,
    pub amount_minor: i64,
    pub currency: Currency,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub sales_channel: Option<String>,
    pub note: Option<String>,
}

impl Order {
    pub fn new(
        order_number: String,
        amount_minor: i64,
        currency: Currency,
        order_date: NaiveDate,
    ) -> ResultEngine<Self> {
        if amount_minor < 0 {
            return Err(EngineError::InvalidAmount(
                "amount_minor must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            customer_id: None,
            order_date,
            order_number,
            amount_minor,
            currency,
            payment_status: PaymentStatus::Pending,
            fulfillment_status: FulfillmentStatus::Unfulfilled,
            sales_channel: None,
            note: None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: Option<String>,
    pub order_date: Date,
    pub order_number: String,
    pub amount_minor: i64,
    pub currency: String,
    pub payment_status: String,
    pub fulfillment_status: String,
    pub sales_channel: Option<String>,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Customers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Order> for ActiveModel {
    fn from(order: &Order) -> Self {
        Self {
            id: ActiveValue::Set(order.id.to_string()),
            customer_id: ActiveValue::Set(order.customer_id.map(|id| id.to_string())),
            order_date: ActiveValue::Set(order.order_date),
            order_number: ActiveValue::Set(order.order_number.clone()),
            amount_minor: ActiveValue::Set(order.amount_minor),
            currency: ActiveValue::Set(order.currency.code().to_string()),
            payment_status: ActiveValue::Set(order.payment_status.as_str().to_string()),
            fulfillment_status: ActiveValue::Set(order.fulfillment_status.as_str().to_string()),
            sales_channel: ActiveValue::Set(order.sales_channel.clone()),
            note: ActiveValue::Set(order.note.clone()),
        }
    }
}

impl TryFrom<Model> for Order {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "order")?,
            customer_id: model
                .customer_id
                .as_deref()
                .map(|raw| parse_uuid(raw, "customer"))
                .transpose()?,
            order_date: model.order_date,
            order_number: model.order_number,
            amount_minor: model.amount_minor,
            currency: Currency::try_from(model.currency.as_str()).unwrap_or_default(),
            payment_status: PaymentStatus::try_from(model.payment_status.as_str())?,
            fulfillment_status: FulfillmentStatus::try_from(model.fulfillment_status.as_str())?,
            sales_channel: model.sales_channel,
            note: model.note,
        })
    }
}
