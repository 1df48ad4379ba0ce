//! Command structs for engine write operations.
//!
//! These types group parameters for creates and updates, keeping call sites
//! readable and avoiding long argument lists. Absent fields on an update
//! command leave the stored value untouched.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{Currency, EntryKind, FulfillmentStatus, PaymentStatus, TaskPriority, TaskStatus};

/// Create a customer record.
#[derive(Clone, Debug, Default)]
pub struct CustomerNewCmd {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub platform_customer_id: Option<String>,
    pub note: Option<String>,
    /// Defaults to today when absent.
    pub created_at: Option<NaiveDate>,
}

impl CustomerNewCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: NaiveDate) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Partial update of a customer record.
#[derive(Clone, Debug, Default)]
pub struct CustomerUpdateCmd {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub platform_customer_id: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<NaiveDate>,
}

impl CustomerUpdateCmd {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Create an order record.
#[derive(Clone, Debug)]
pub struct OrderNewCmd {
    pub order_number: String,
    pub amount_minor: i64,
    pub customer_id: Option<Uuid>,
    /// Defaults to today when absent.
    pub order_date: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub payment_status: Option<PaymentStatus>,
    pub fulfillment_status: Option<FulfillmentStatus>,
    pub sales_channel: Option<String>,
    pub note: Option<String>,
}

impl OrderNewCmd {
    #[must_use]
    pub fn new(order_number: impl Into<String>, amount_minor: i64) -> Self {
        Self {
            order_number: order_number.into(),
            amount_minor,
            customer_id: None,
            order_date: None,
            currency: None,
            payment_status: None,
            fulfillment_status: None,
            sales_channel: None,
            note: None,
        }
    }

    #[must_use]
    pub fn customer_id(mut self, customer_id: Uuid) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    #[must_use]
    pub fn order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = Some(order_date);
        self
    }

    #[must_use]
    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    #[must_use]
    pub fn fulfillment_status(mut self, status: FulfillmentStatus) -> Self {
        self.fulfillment_status = Some(status);
        self
    }
}

/// Partial update of an order record.
#[derive(Clone, Debug, Default)]
pub struct OrderUpdateCmd {
    pub id: Uuid,
    pub order_number: Option<String>,
    pub amount_minor: Option<i64>,
    pub customer_id: Option<Uuid>,
    pub order_date: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub payment_status: Option<PaymentStatus>,
    pub fulfillment_status: Option<FulfillmentStatus>,
    pub sales_channel: Option<String>,
    pub note: Option<String>,
}

impl OrderUpdateCmd {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn amount_minor(mut self, amount_minor: i64) -> Self {
        self.amount_minor = Some(amount_minor);
        self
    }

    #[must_use]
    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }
}

/// Create a ledger entry.
#[derive(Clone, Debug)]
pub struct EntryNewCmd {
    pub kind: EntryKind,
    pub amount_minor: i64,
    /// Defaults to `"General"` when absent.
    pub category: Option<String>,
    pub description: Option<String>,
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
}

impl EntryNewCmd {
    #[must_use]
    pub fn new(kind: EntryKind, amount_minor: i64) -> Self {
        Self {
            kind,
            amount_minor,
            category: None,
            description: None,
            date: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update of a ledger entry.
#[derive(Clone, Debug, Default)]
pub struct EntryUpdateCmd {
    pub id: Uuid,
    pub kind: Option<EntryKind>,
    pub amount_minor: Option<i64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EntryUpdateCmd {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Create a task record.
#[derive(Clone, Debug)]
pub struct TaskNewCmd {
    pub title: String,
    pub customer_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub note: Option<String>,
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
}

impl TaskNewCmd {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            customer_id: None,
            status: None,
            priority: None,
            note: None,
            date: None,
        }
    }

    #[must_use]
    pub fn customer_id(mut self, customer_id: Uuid) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    #[must_use]
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update of a task record.
#[derive(Clone, Debug, Default)]
pub struct TaskUpdateCmd {
    pub id: Uuid,
    pub title: Option<String>,
    pub customer_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TaskUpdateCmd {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}
