use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

pub mod customer {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomerNew {
        pub name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub city: Option<String>,
        pub country: Option<String>,
        /// Reference to the customer record on the external store platform.
        pub platform_customer_id: Option<String>,
        pub note: Option<String>,
        /// `YYYY-MM-DD`; defaults to today when absent.
        pub created_at: Option<NaiveDate>,
    }

    /// Partial update; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CustomerUpdate {
        pub name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub city: Option<String>,
        pub country: Option<String>,
        pub platform_customer_id: Option<String>,
        pub note: Option<String>,
        pub created_at: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomerView {
        pub id: Uuid,
        pub created_at: NaiveDate,
        pub name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub city: Option<String>,
        pub country: Option<String>,
        pub platform_customer_id: Option<String>,
        pub note: Option<String>,
    }

    /// Query-string filters for the customer listing.
    ///
    /// Dates travel as raw strings so malformed input surfaces as a
    /// validation error instead of a deserialization rejection.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CustomerListQuery {
        pub search: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomerListResponse {
        pub customers: Vec<CustomerView>,
    }
}

pub mod order {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentStatus {
        Pending,
        Paid,
        Refunded,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FulfillmentStatus {
        Unfulfilled,
        Partial,
        Fulfilled,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderNew {
        pub order_number: String,
        /// Amount in minor units; must be >= 0.
        pub amount_minor: i64,
        pub customer_id: Option<Uuid>,
        /// `YYYY-MM-DD`; defaults to today when absent.
        pub order_date: Option<NaiveDate>,
        pub currency: Option<Currency>,
        pub payment_status: Option<PaymentStatus>,
        pub fulfillment_status: Option<FulfillmentStatus>,
        pub sales_channel: Option<String>,
        pub note: Option<String>,
    }

    /// Partial update; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct OrderUpdate {
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

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderView {
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

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct OrderListQuery {
        pub search: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderListResponse {
        pub orders: Vec<OrderView>,
        /// Sum of the returned orders' amounts.
        pub total_amount_minor: i64,
    }
}

pub mod entry {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum EntryKind {
        Expense,
        Income,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub kind: EntryKind,
        /// Amount in minor units; must be >= 0, the sign is implied by `kind`.
        pub amount_minor: i64,
        /// Defaults to `"General"` when absent.
        pub category: Option<String>,
        pub description: Option<String>,
        /// `YYYY-MM-DD`; defaults to today when absent.
        pub date: Option<NaiveDate>,
    }

    /// Partial update; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EntryUpdate {
        pub kind: Option<EntryKind>,
        pub amount_minor: Option<i64>,
        pub category: Option<String>,
        pub description: Option<String>,
        pub date: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: Uuid,
        pub date: NaiveDate,
        pub kind: EntryKind,
        pub category: String,
        pub description: Option<String>,
        pub amount_minor: i64,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EntryListQuery {
        pub search: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        /// `expense`, `income`, or the sentinel `all` (default).
        pub kind: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryListResponse {
        pub entries: Vec<EntryView>,
        /// Sum of the returned entries' amounts, regardless of kind.
        pub total_minor: i64,
    }
}

pub mod task {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TaskStatus {
        Pending,
        InProgress,
        Done,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TaskPriority {
        Low,
        Medium,
        High,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TaskNew {
        pub title: String,
        pub customer_id: Option<Uuid>,
        /// Defaults to `pending` when absent.
        pub status: Option<TaskStatus>,
        pub priority: Option<TaskPriority>,
        pub note: Option<String>,
        /// `YYYY-MM-DD`; defaults to today when absent.
        pub date: Option<NaiveDate>,
    }

    /// Partial update; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TaskUpdate {
        pub title: Option<String>,
        pub customer_id: Option<Uuid>,
        pub status: Option<TaskStatus>,
        pub priority: Option<TaskPriority>,
        pub note: Option<String>,
        pub date: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TaskView {
        pub id: Uuid,
        pub customer_id: Option<Uuid>,
        pub date: NaiveDate,
        pub title: String,
        pub status: TaskStatus,
        pub priority: Option<TaskPriority>,
        pub note: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TaskListQuery {
        pub search: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        /// A task status, or the sentinel `all` (default).
        pub status: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TaskListResponse {
        pub tasks: Vec<TaskView>,
    }
}

pub mod stats {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Totals {
        pub customers: u64,
        pub orders: u64,
        pub income_minor: i64,
        pub expense_minor: i64,
        pub net_minor: i64,
        pub open_tasks: u64,
    }
}

pub mod export {
    use super::*;

    /// Query-string parameters shared by the export endpoints.
    ///
    /// `filter_type` only applies to the entries export, `status_filter` only
    /// to the tasks export; both accept the sentinel `all`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExportQuery {
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub filter_type: Option<String>,
        pub status_filter: Option<String>,
    }
}
