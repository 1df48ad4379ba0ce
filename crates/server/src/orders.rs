//! Order API endpoints

use api_types::order::{
    FulfillmentStatus as ApiFulfillment, OrderListQuery, OrderListResponse, OrderNew, OrderUpdate,
    OrderView, PaymentStatus as ApiPayment,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{DateRange, Order, OrderListFilter, OrderNewCmd, OrderUpdateCmd};
use uuid::Uuid;

use crate::{ServerError, operator, server::ServerState};

pub(crate) fn map_currency(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Usd => api_types::Currency::Usd,
        engine::Currency::Eur => api_types::Currency::Eur,
    }
}

fn currency_from_api(currency: api_types::Currency) -> engine::Currency {
    match currency {
        api_types::Currency::Usd => engine::Currency::Usd,
        api_types::Currency::Eur => engine::Currency::Eur,
    }
}

fn map_payment(status: engine::PaymentStatus) -> ApiPayment {
    match status {
        engine::PaymentStatus::Pending => ApiPayment::Pending,
        engine::PaymentStatus::Paid => ApiPayment::Paid,
        engine::PaymentStatus::Refunded => ApiPayment::Refunded,
    }
}

fn payment_from_api(status: ApiPayment) -> engine::PaymentStatus {
    match status {
        ApiPayment::Pending => engine::PaymentStatus::Pending,
        ApiPayment::Paid => engine::PaymentStatus::Paid,
        ApiPayment::Refunded => engine::PaymentStatus::Refunded,
    }
}

fn map_fulfillment(status: engine::FulfillmentStatus) -> ApiFulfillment {
    match status {
        engine::FulfillmentStatus::Unfulfilled => ApiFulfillment::Unfulfilled,
        engine::FulfillmentStatus::Partial => ApiFulfillment::Partial,
        engine::FulfillmentStatus::Fulfilled => ApiFulfillment::Fulfilled,
    }
}

fn fulfillment_from_api(status: ApiFulfillment) -> engine::FulfillmentStatus {
    match status {
        ApiFulfillment::Unfulfilled => engine::FulfillmentStatus::Unfulfilled,
        ApiFulfillment::Partial => engine::FulfillmentStatus::Partial,
        ApiFulfillment::Fulfilled => engine::FulfillmentStatus::Fulfilled,
    }
}

fn view(order: Order) -> OrderView {
    OrderView {
        id: order.id,
        customer_id: order.customer_id,
        order_date: order.order_date,
        order_number: order.order_number,
        amount_minor: order.amount_minor,
        currency: map_currency(order.currency),
        payment_status: map_payment(order.payment_status),
        fulfillment_status: map_fulfillment(order.fulfillment_status),
        sales_channel: order.sales_channel,
        note: order.note,
    }
}

pub async fn create(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<OrderNew>,
) -> Result<(StatusCode, Json<OrderView>), ServerError> {
    let order = state
        .engine
        .new_order(OrderNewCmd {
            order_number: payload.order_number,
            amount_minor: payload.amount_minor,
            customer_id: payload.customer_id,
            order_date: payload.order_date,
            currency: payload.currency.map(currency_from_api),
            payment_status: payload.payment_status.map(payment_from_api),
            fulfillment_status: payload.fulfillment_status.map(fulfillment_from_api),
            sales_channel: payload.sales_channel,
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(order))))
}

pub async fn list(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<OrderListResponse>, ServerError> {
    let filter = OrderListFilter {
        search: query.search,
        range: DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?,
    };
    let orders = state.engine.list_orders(&filter).await?;
    let total_amount_minor = orders.iter().map(|order| order.amount_minor).sum();

    Ok(Json(OrderListResponse {
        orders: orders.into_iter().map(view).collect(),
        total_amount_minor,
    }))
}

pub async fn update(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OrderUpdate>,
) -> Result<Json<OrderView>, ServerError> {
    let order = state
        .engine
        .update_order(OrderUpdateCmd {
            id,
            order_number: payload.order_number,
            amount_minor: payload.amount_minor,
            customer_id: payload.customer_id,
            order_date: payload.order_date,
            currency: payload.currency.map(currency_from_api),
            payment_status: payload.payment_status.map(payment_from_api),
            fulfillment_status: payload.fulfillment_status.map(fulfillment_from_api),
            sales_channel: payload.sales_channel,
            note: payload.note,
        })
        .await?;

    Ok(Json(view(order)))
}

pub async fn remove(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
