use sea_orm::{Condition, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, Entry, EntryKind, EntryNewCmd, EntryUpdateCmd, ResultEngine, entries,
    util::{normalize_optional_text, normalize_required_text},
};

use super::{DateRange, Engine, today};

/// Fallback category when the caller leaves it blank.
const DEFAULT_CATEGORY: &str = "General";

/// Filters for listing ledger entries.
#[derive(Clone, Debug, Default)]
pub struct EntryListFilter {
    /// Case-insensitive substring match over category/description.
    pub search: Option<String>,
    pub range: DateRange,
    /// If present, only entries of this kind are returned.
    pub kind: Option<EntryKind>,
}

impl Engine {
    /// Create a ledger entry.
    pub async fn new_entry(&self, cmd: EntryNewCmd) -> ResultEngine<Entry> {
        let category = normalize_optional_text(cmd.category.as_deref())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let mut entry = Entry::new(
            cmd.kind,
            cmd.amount_minor,
            category,
            cmd.date.unwrap_or_else(today),
        )?;
        entry.description = normalize_optional_text(cmd.description.as_deref());

        entries::ActiveModel::from(&entry)
            .insert(&self.database)
            .await?;
        Ok(entry)
    }

    /// Return a ledger entry by id.
    pub async fn entry(&self, entry_id: Uuid) -> ResultEngine<Entry> {
        let model = entries::Entity::find_by_id(entry_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("entry not exists".to_string()))?;
        Entry::try_from(model)
    }

    /// List ledger entries, newest first.
    pub async fn list_entries(&self, filter: &EntryListFilter) -> ResultEngine<Vec<Entry>> {
        let mut query = entries::Entity::find();

        if let Some(kind) = filter.kind {
            query = query.filter(entries::Column::Kind.eq(kind.as_str()));
        }
        if let Some(search) = normalize_optional_text(filter.search.as_deref()) {
            query = query.filter(
                Condition::any()
                    .add(entries::Column::Category.contains(&search))
                    .add(entries::Column::Description.contains(&search)),
            );
        }
        if let Some(start) = filter.range.start {
            query = query.filter(entries::Column::Date.gte(start));
        }
        if let Some(end) = filter.range.end {
            query = query.filter(entries::Column::Date.lte(end));
        }

        let models = query
            .order_by_desc(entries::Column::Date)
            .all(&self.database)
            .await?;
        models.into_iter().map(Entry::try_from).collect()
    }

    /// Update a ledger entry. Absent fields keep their stored value.
    pub async fn update_entry(&self, cmd: EntryUpdateCmd) -> ResultEngine<Entry> {
        let model = entries::Entity::find_by_id(cmd.id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("entry not exists".to_string()))?;
        let mut entry = Entry::try_from(model)?;

        if let Some(kind) = cmd.kind {
            entry.kind = kind;
        }
        if let Some(amount_minor) = cmd.amount_minor {
            if amount_minor < 0 {
                return Err(EngineError::InvalidAmount(
                    "amount_minor must be >= 0".to_string(),
                ));
            }
            entry.amount_minor = amount_minor;
        }
        if let Some(category) = cmd.category.as_deref() {
            entry.category = normalize_required_text(category, "category")?;
        }
        if let Some(description) = cmd.description.as_deref() {
            entry.description = normalize_optional_text(Some(description));
        }
        if let Some(date) = cmd.date {
            entry.date = date;
        }

        entries::ActiveModel::from(&entry)
            .update(&self.database)
            .await?;
        Ok(entry)
    }

    /// Delete a ledger entry.
    pub async fn delete_entry(&self, entry_id: Uuid) -> ResultEngine<()> {
        let result = entries::Entity::delete_by_id(entry_id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("entry not exists".to_string()));
        }
        Ok(())
    }
}
