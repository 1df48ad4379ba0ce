use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod customers;
mod entries;
mod exports;
mod operator;
mod orders;
mod server;
mod stats;
mod tasks;

pub mod types {
    pub mod customer {
        pub use api_types::customer::{
            CustomerListQuery, CustomerListResponse, CustomerNew, CustomerUpdate, CustomerView,
        };
    }

    pub mod order {
        pub use api_types::order::{
            FulfillmentStatus, OrderListQuery, OrderListResponse, OrderNew, OrderUpdate, OrderView,
            PaymentStatus,
        };
    }

    pub mod entry {
        pub use api_types::entry::{
            EntryKind, EntryListQuery, EntryListResponse, EntryNew, EntryUpdate, EntryView,
        };
    }

    pub mod task {
        pub use api_types::task::{
            TaskListQuery, TaskListResponse, TaskNew, TaskPriority, TaskStatus, TaskUpdate,
            TaskView,
        };
    }

    pub mod stats {
        pub use api_types::stats::Totals;
    }

    pub mod export {
        pub use api_types::export::ExportQuery;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidValue(_)
        | EngineError::InvalidDate(_)
        | EngineError::InvalidAmount(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
