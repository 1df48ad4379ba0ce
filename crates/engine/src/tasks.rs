//! Follow-up tasks.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, util::parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(EngineError::InvalidValue(format!(
                "invalid task status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(EngineError::InvalidValue(format!(
                "invalid task priority: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
    pub note: Option<String>,
}

impl Task {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id: None,
            date,
            title,
            status: TaskStatus::Pending,
            priority: None,
            note: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: Option<String>,
    pub date: Date,
    pub title: String,
    pub status: String,
    pub priority: Option<String>,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Customers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Task> for ActiveModel {
    fn from(task: &Task) -> Self {
        Self {
            id: ActiveValue::Set(task.id.to_string()),
            customer_id: ActiveValue::Set(task.customer_id.map(|id| id.to_string())),
            date: ActiveValue::Set(task.date),
            title: ActiveValue::Set(task.title.clone()),
            status: ActiveValue::Set(task.status.as_str().to_string()),
            priority: ActiveValue::Set(task.priority.map(|p| p.as_str().to_string())),
            note: ActiveValue::Set(task.note.clone()),
        }
    }
}

impl TryFrom<Model> for Task {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "task")?,
            customer_id: model
                .customer_id
                .as_deref()
                .map(|raw| parse_uuid(raw, "customer"))
                .transpose()?,
            date: model.date,
            title: model.title,
            status: TaskStatus::try_from(model.status.as_str())?,
            priority: model
                .priority
                .as_deref()
                .map(TaskPriority::try_from)
                .transpose()?,
            note: model.note,
        })
    }
}
