//! Statistics API endpoints

use api_types::stats::Totals;
use axum::{Extension, Json, extract::State};

use crate::{ServerError, operator, server::ServerState};

/// Handle requests for dashboard totals
pub async fn totals(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Totals>, ServerError> {
    let totals = state.engine.totals().await?;

    Ok(Json(Totals {
        customers: totals.customers,
        orders: totals.orders,
        income_minor: totals.income_minor,
        expense_minor: totals.expense_minor,
        net_minor: totals.net_minor,
        open_tasks: totals.open_tasks,
    }))
}
