//! Task API endpoints

use api_types::task::{
    TaskListQuery, TaskListResponse, TaskNew, TaskPriority as ApiPriority,
    TaskStatus as ApiStatus, TaskUpdate, TaskView,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{DateRange, Task, TaskListFilter, TaskNewCmd, TaskStatus, TaskUpdateCmd};
use uuid::Uuid;

use crate::{ServerError, operator, server::ServerState};

fn map_status(status: TaskStatus) -> ApiStatus {
    match status {
        TaskStatus::Pending => ApiStatus::Pending,
        TaskStatus::InProgress => ApiStatus::InProgress,
        TaskStatus::Done => ApiStatus::Done,
    }
}

fn status_from_api(status: ApiStatus) -> TaskStatus {
    match status {
        ApiStatus::Pending => TaskStatus::Pending,
        ApiStatus::InProgress => TaskStatus::InProgress,
        ApiStatus::Done => TaskStatus::Done,
    }
}

fn map_priority(priority: engine::TaskPriority) -> ApiPriority {
    match priority {
        engine::TaskPriority::Low => ApiPriority::Low,
        engine::TaskPriority::Medium => ApiPriority::Medium,
        engine::TaskPriority::High => ApiPriority::High,
    }
}

fn priority_from_api(priority: ApiPriority) -> engine::TaskPriority {
    match priority {
        ApiPriority::Low => engine::TaskPriority::Low,
        ApiPriority::Medium => engine::TaskPriority::Medium,
        ApiPriority::High => engine::TaskPriority::High,
    }
}

/// Parses the `status` query filter; `all`, empty, or absent means no filter.
pub(crate) fn parse_status_filter(raw: Option<&str>) -> Result<Option<TaskStatus>, ServerError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(other) => Ok(Some(TaskStatus::try_from(other)?)),
    }
}

fn view(task: Task) -> TaskView {
    TaskView {
        id: task.id,
        customer_id: task.customer_id,
        date: task.date,
        title: task.title,
        status: map_status(task.status),
        priority: task.priority.map(map_priority),
        note: task.note,
    }
}

pub async fn create(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TaskNew>,
) -> Result<(StatusCode, Json<TaskView>), ServerError> {
    let task = state
        .engine
        .new_task(TaskNewCmd {
            title: payload.title,
            customer_id: payload.customer_id,
            status: payload.status.map(status_from_api),
            priority: payload.priority.map(priority_from_api),
            note: payload.note,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(task))))
}

pub async fn list(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<TaskListResponse>, ServerError> {
    let filter = TaskListFilter {
        search: query.search,
        range: DateRange::parse(query.start_date.as_deref(), query.end_date.as_deref())?,
        status: parse_status_filter(query.status.as_deref())?,
    };
    let tasks = state.engine.list_tasks(&filter).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(view).collect(),
    }))
}

pub async fn update(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskUpdate>,
) -> Result<Json<TaskView>, ServerError> {
    let task = state
        .engine
        .update_task(TaskUpdateCmd {
            id,
            title: payload.title,
            customer_id: payload.customer_id,
            status: payload.status.map(status_from_api),
            priority: payload.priority.map(priority_from_api),
            note: payload.note,
            date: payload.date,
        })
        .await?;

    Ok(Json(view(task)))
}

pub async fn remove(
    _: Extension<operator::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
