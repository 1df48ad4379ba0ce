use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod customers;
mod entries;
mod exports;
mod orders;
mod stats;
mod tasks;

pub use customers::CustomerListFilter;
pub use entries::EntryListFilter;
pub use orders::OrderListFilter;
pub use stats::Totals;
pub use tasks::TaskListFilter;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Inclusive calendar-date range used by listings and exports.
///
/// An unsatisfiable range (`start > end`) is not an error: queries simply
/// match nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Parse `YYYY-MM-DD` bounds as they arrive from query strings.
    ///
    /// Empty strings count as absent bounds; anything else that fails to
    /// parse is an [`EngineError::InvalidDate`].
    pub fn parse(start: Option<&str>, end: Option<&str>) -> ResultEngine<Self> {
        Ok(Self {
            start: parse_date_opt(start)?,
            end: parse_date_opt(end)?,
        })
    }
}

fn parse_date_opt(raw: Option<&str>) -> ResultEngine<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| EngineError::InvalidDate(format!("expected YYYY-MM-DD, got {raw}")))
}

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_bounds() {
        let range = DateRange::parse(Some("2024-01-01"), Some("2024-01-31")).unwrap();
        assert_eq!(
            range.start,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            range.end,
            Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
    }

    #[test]
    fn empty_strings_are_open_bounds() {
        let range = DateRange::parse(Some(""), Some("  ")).unwrap();
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = DateRange::parse(Some("01/05/2024"), None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDate(_)));
    }
}
