//! Customer records.
//!
//! A `Customer` is a flat contact card; orders and tasks may point at one
//! through an optional reference.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, util::parse_uuid};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub created_at: NaiveDate,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Reference to the customer record on the external store platform.
    pub platform_customer_id: Option<String>,
    pub note: Option<String>,
}

impl Customer {
    pub fn new(name: String, created_at: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            name,
            email: None,
            phone: None,
            city: None,
            country: None,
            platform_customer_id: None,
            note: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_at: Date,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub platform_customer_id: Option<String>,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::tasks::Entity")]
    Tasks,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Customer> for ActiveModel {
    fn from(customer: &Customer) -> Self {
        Self {
            id: ActiveValue::Set(customer.id.to_string()),
            created_at: ActiveValue::Set(customer.created_at),
            name: ActiveValue::Set(customer.name.clone()),
            email: ActiveValue::Set(customer.email.clone()),
            phone: ActiveValue::Set(customer.phone.clone()),
            city: ActiveValue::Set(customer.city.clone()),
            country: ActiveValue::Set(customer.country.clone()),
            platform_customer_id: ActiveValue::Set(customer.platform_customer_id.clone()),
            note: ActiveValue::Set(customer.note.clone()),
        }
    }
}

impl TryFrom<Model> for Customer {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "customer")?,
            created_at: model.created_at,
            name: model.name,
            email: model.email,
            phone: model.phone,
            city: model.city,
            country: model.country,
            platform_customer_id: model.platform_customer_id,
            note: model.note,
        })
    }
}
