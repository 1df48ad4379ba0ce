//! Ledger entry API endpoints

use api_types::entry::{
    EntryKind as ApiKind, EntryListQuery, EntryListResponse, EntryNew, EntryUpdate, EntryView,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{DateRange, Entry, EntryKind, EntryListFilter, EntryNewCmd, EntryUpdateCmd};
use uuid::Uuid;

use crate::{ServerError, operator, server::ServerState};

fn map_kind(kind: EntryKind) -> ApiKind {
    match kind {
        EntryKind::Expense => ApiKind::Expense,
        EntryKind::Income => ApiKind::Income,
    }
}

fn kind_from_api(kind: ApiKind) -> EntryKind {
    match kind {
        ApiKind::Expense => EntryKind::Expense,
        ApiKind::Income => EntryKind::Income,
    }
}

/// Parses the `kind` query filter; `all`, empty, or absent means no filter.
pub(crate) fn parse_kind_filter(raw: Option<&str>) -> Result<Option<EntryKind>, ServerError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(other) => Ok(Some(EntryKind::try_from(other)?)),
    }
}

fn view(entry: Entry) -> EntryView {
    EntryView {
        id: entry.id,
        date: entry.date,
        kind: map_kind(entry.kind),
        category: entry.category,
        description: entry.description,
        amount_minor: entry.amount_minor,
    }
}

pub async fn create(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<EntryNew>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let entry = state
        .engine
        .new_entry(EntryNewCmd {
            kind: kind_from_api(payload.kind),
            amount_minor: payload.amount_minor,
            category: payload.category,
            description: payload.description,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(entry))))
}

pub async fn list(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<EntryListQuery>,
) -> Result<Json<EntryListResponse>, ServerError> {
    let filter = EntryListFilter {
        search: query.search,
        range: DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?,
        kind: parse_kind_filter(query.kind.as_deref())?,
    };
    let entries = state.engine.list_entries(&filter).await?;
    let total_minor = entries.iter().map(|entry| entry.amount_minor).sum();

    Ok(Json(EntryListResponse {
        entries: entries.into_iter().map(view).collect(),
        total_minor,
    }))
}

pub async fn update(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryUpdate>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = state
        .engine
        .update_entry(EntryUpdateCmd {
            id,
            kind: payload.kind.map(kind_from_api),
            amount_minor: payload.amount_minor,
            category: payload.category,
            description: payload.description,
            date: payload.date,
        })
        .await?;

    Ok(Json(view(entry)))
}

pub async fn remove(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
