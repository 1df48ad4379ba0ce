//! Handlers for the spreadsheet export endpoints.
//!
//! Each handler runs the filtered read through the engine and streams the
//! rows into a CSV attachment. The header row is always written, even when
//! the range matches nothing.

use std::collections::HashMap;

use api_types::export::ExportQuery;
use axum::{
    Extension,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use csv::Writer;
use uuid::Uuid;

use engine::DateRange;

use crate::{
    ServerError, entries::parse_kind_filter, operator, server::ServerState,
    tasks::parse_status_filter,
};

fn range_label(range: &DateRange) -> String {
    let start = range
        .start
        .map_or_else(|| "all".to_string(), |date| date.to_string());
    let end = range
        .end
        .map_or_else(|| "all".to_string(), |date| date.to_string());
    format!("{start}_{end}")
}

fn write_record<const N: usize>(
    writer: &mut Writer<Vec<u8>>,
    record: [String; N],
) -> Result<(), ServerError> {
    writer
        .write_record(&record)
        .map_err(|err| ServerError::Generic(format!("failed to write export row: {err}")))
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, ServerError> {
    writer
        .into_inner()
        .map_err(|err| ServerError::Generic(format!("failed to finalize export: {err}")))
}

fn csv_attachment(filename: String, data: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    )
        .into_response()
}

fn customer_name(names: &HashMap<Uuid, String>, customer_id: Option<Uuid>) -> String {
    customer_id
        .and_then(|id| names.get(&id).cloned())
        .unwrap_or_default()
}

pub async fn customers(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServerError> {
    let range = DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?;
    let customers = state.engine.export_customers(range).await?;

    let mut writer = Writer::from_writer(vec![]);
    write_record(
        &mut writer,
        [
            "id".to_string(),
            "created_at".to_string(),
            "name".to_string(),
            "email".to_string(),
            "phone".to_string(),
            "city".to_string(),
            "country".to_string(),
            "platform_customer_id".to_string(),
            "note".to_string(),
        ],
    )?;
    for customer in customers {
        write_record(
            &mut writer,
            [
                customer.id.to_string(),
                customer.created_at.to_string(),
                customer.name,
                customer.email.unwrap_or_default(),
                customer.phone.unwrap_or_default(),
                customer.city.unwrap_or_default(),
                customer.country.unwrap_or_default(),
                customer.platform_customer_id.unwrap_or_default(),
                customer.note.unwrap_or_default(),
            ],
        )?;
    }

    let data = finish(writer)?;
    Ok(csv_attachment(
        format!("customers_{}.csv", range_label(&range)),
        data,
    ))
}

pub async fn orders(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServerError> {
    let range = DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?;
    let (orders, names) = state.engine.export_orders(range).await?;

    let mut writer = Writer::from_writer(vec![]);
    write_record(
        &mut writer,
        [
            "id".to_string(),
            "order_date".to_string(),
            "order_number".to_string(),
            "customer".to_string(),
            "amount_minor".to_string(),
            "currency".to_string(),
            "payment_status".to_string(),
            "fulfillment_status".to_string(),
            "sales_channel".to_string(),
            "note".to_string(),
        ],
    )?;
    for order in orders {
        write_record(
            &mut writer,
            [
                order.id.to_string(),
                order.order_date.to_string(),
                order.order_number,
                customer_name(&names, order.customer_id),
                order.amount_minor.to_string(),
                order.currency.code().to_string(),
                order.payment_status.as_str().to_string(),
                order.fulfillment_status.as_str().to_string(),
                order.sales_channel.unwrap_or_default(),
                order.note.unwrap_or_default(),
            ],
        )?;
    }

    let data = finish(writer)?;
    Ok(csv_attachment(
        format!("orders_{}.csv", range_label(&range)),
        data,
    ))
}

pub async fn entries(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServerError> {
    let range = DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?;
    let kind = parse_kind_filter(query.filter_type.as_deref())?;
    let entries = state.engine.export_entries(range, kind).await?;

    let mut writer = Writer::from_writer(vec![]);
    write_record(
        &mut writer,
        [
            "id".to_string(),
            "date".to_string(),
            "kind".to_string(),
            "category".to_string(),
            "description".to_string(),
            "amount_minor".to_string(),
        ],
    )?;
    for entry in entries {
        write_record(
            &mut writer,
            [
                entry.id.to_string(),
                entry.date.to_string(),
                entry.kind.as_str().to_string(),
                entry.category,
                entry.description.unwrap_or_default(),
                entry.amount_minor.to_string(),
            ],
        )?;
    }

    let data = finish(writer)?;
    Ok(csv_attachment(
        format!("entries_{}.csv", range_label(&range)),
        data,
    ))
}

pub async fn tasks(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServerError> {
    let range = DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?;
    let status = parse_status_filter(query.status_filter.as_deref())?;
    let (tasks, names) = state.engine.export_tasks(range, status).await?;

    let mut writer = Writer::from_writer(vec![]);
    write_record(
        &mut writer,
        [
            "id".to_string(),
            "date".to_string(),
            "title".to_string(),
            "customer".to_string(),
            "status".to_string(),
            "priority".to_string(),
            "note".to_string(),
        ],
    )?;
    for task in tasks {
        write_record(
            &mut writer,
            [
                task.id.to_string(),
                task.date.to_string(),
                task.title,
                customer_name(&names, task.customer_id),
                task.status.as_str().to_string(),
                task.priority.map(|p| p.as_str().to_string()).unwrap_or_default(),
                task.note.unwrap_or_default(),
            ],
        )?;
    }

    let data = finish(writer)?;
    Ok(csv_attachment(
        format!("tasks_{}.csv", range_label(&range)),
        data,
    ))
}
