use sea_orm::{Condition, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, Task, TaskNewCmd, TaskStatus, TaskUpdateCmd, tasks,
    util::{normalize_optional_text, normalize_required_text},
};

use super::{DateRange, Engine, customers::ensure_customer_exists, today};

/// Filters for listing tasks.
#[derive(Clone, Debug, Default)]
pub struct TaskListFilter {
    /// Case-insensitive substring match over title/note.
    pub search: Option<String>,
    pub range: DateRange,
    /// If present, only tasks in this status are returned.
    pub status: Option<TaskStatus>,
}

impl Engine {
    /// Create a task record.
    pub async fn new_task(&self, cmd: TaskNewCmd) -> ResultEngine<Task> {
        let title = normalize_required_text(&cmd.title, "task title")?;
        if let Some(customer_id) = cmd.customer_id {
            ensure_customer_exists(&self.database, customer_id).await?;
        }

        let mut task = Task::new(title, cmd.date.unwrap_or_else(today));
        task.customer_id = cmd.customer_id;
        if let Some(status) = cmd.status {
            task.status = status;
        }
        task.priority = cmd.priority;
        task.note = normalize_optional_text(cmd.note.as_deref());

        tasks::ActiveModel::from(&task)
            .insert(&self.database)
            .await?;
        Ok(task)
    }

    /// Return a task by id.
    pub async fn task(&self, task_id: Uuid) -> ResultEngine<Task> {
        let model = tasks::Entity::find_by_id(task_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("task not exists".to_string()))?;
        Task::try_from(model)
    }

    /// List tasks, newest first.
    pub async fn list_tasks(&self, filter: &TaskListFilter) -> ResultEngine<Vec<Task>> {
        let mut query = tasks::Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(tasks::Column::Status.eq(status.as_str()));
        }
        if let Some(search) = normalize_optional_text(filter.search.as_deref()) {
            query = query.filter(
                Condition::any()
                    .add(tasks::Column::Title.contains(&search))
                    .add(tasks::Column::Note.contains(&search)),
            );
        }
        if let Some(start) = filter.range.start {
            query = query.filter(tasks::Column::Date.gte(start));
        }
        if let Some(end) = filter.range.end {
            query = query.filter(tasks::Column::Date.lte(end));
        }

        let models = query
            .order_by_desc(tasks::Column::Date)
            .all(&self.database)
            .await?;
        models.into_iter().map(Task::try_from).collect()
    }

    /// Update a task record. Absent fields keep their stored value.
    pub async fn update_task(&self, cmd: TaskUpdateCmd) -> ResultEngine<Task> {
        let model = tasks::Entity::find_by_id(cmd.id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("task not exists".to_string()))?;
        let mut task = Task::try_from(model)?;

        if let Some(title) = cmd.title.as_deref() {
            task.title = normalize_required_text(title, "task title")?;
        }
        if let Some(customer_id) = cmd.customer_id {
            ensure_customer_exists(&self.database, customer_id).await?;
            task.customer_id = Some(customer_id);
        }
        if let Some(status) = cmd.status {
            task.status = status;
        }
        if let Some(priority) = cmd.priority {
            task.priority = Some(priority);
        }
        if let Some(note) = cmd.note.as_deref() {
            task.note = normalize_optional_text(Some(note));
        }
        if let Some(date) = cmd.date {
            task.date = date;
        }

        tasks::ActiveModel::from(&task)
            .update(&self.database)
            .await?;
        Ok(task)
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: Uuid) -> ResultEngine<()> {
        let result = tasks::Entity::delete_by_id(task_id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("task not exists".to_string()));
        }
        Ok(())
    }
}
