pub use commands::{
    CustomerNewCmd, CustomerUpdateCmd, EntryNewCmd, EntryUpdateCmd, OrderNewCmd, OrderUpdateCmd,
    TaskNewCmd, TaskUpdateCmd,
};
pub use currency::Currency;
pub use customers::Customer;
pub use entries::{Entry, EntryKind};
pub use error::EngineError;
pub use ops::{
    CustomerListFilter, DateRange, Engine, EngineBuilder, EntryListFilter, OrderListFilter,
    TaskListFilter, Totals,
};
pub use orders::{FulfillmentStatus, Order, PaymentStatus};
pub use tasks::{Task, TaskPriority, TaskStatus};

mod commands;
mod currency;
mod customers;
mod entries;
mod error;
mod ops;
mod orders;
mod tasks;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
