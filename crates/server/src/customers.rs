//! Customer API endpoints

use api_types::customer::{
    CustomerListQuery, CustomerListResponse, CustomerNew, CustomerUpdate, CustomerView,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{Customer, CustomerListFilter, CustomerNewCmd, CustomerUpdateCmd, DateRange};
use uuid::Uuid;

use crate::{ServerError, operator, server::ServerState};

fn view(customer: Customer) -> CustomerView {
    CustomerView {
        id: customer.id,
        created_at: customer.created_at,
        name: customer.name,
        email: customer.email,
        phone: customer.phone,
        city: customer.city,
        country: customer.country,
        platform_customer_id: customer.platform_customer_id,
        note: customer.note,
    }
}

pub async fn create(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<CustomerNew>,
) -> Result<(StatusCode, Json<CustomerView>), ServerError> {
    let customer = state
        .engine
        .new_customer(CustomerNewCmd {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            city: payload.city,
            country: payload.country,
            platform_customer_id: payload.platform_customer_id,
            note: payload.note,
            created_at: payload.created_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(customer))))
}

pub async fn list(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<CustomerListResponse>, ServerError> {
    let filter = CustomerListFilter {
        search: query.search,
        range: DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?,
    };
    let customers = state.engine.list_customers(&filter).await?;

    Ok(Json(CustomerListResponse {
        customers: customers.into_iter().map(view).collect(),
    }))
}

pub async fn update(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerUpdate>,
) -> Result<Json<CustomerView>, ServerError> {
    let customer = state
        .engine
        .update_customer(CustomerUpdateCmd {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            city: payload.city,
            country: payload.country,
            platform_customer_id: payload.platform_customer_id,
            note: payload.note,
            created_at: payload.created_at,
        })
        .await?;

    Ok(Json(view(customer)))
}

pub async fn remove(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
