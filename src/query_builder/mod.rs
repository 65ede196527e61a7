use smallvec::SmallVec;
use tracing::debug;

use crate::criteria::{CriteriaGroup, ScopeCollector};
use crate::expression::SqlColumn;
use crate::renderer::Dialect;

mod __tests__;
mod args;
mod error;
mod from;
mod having;
mod join;
mod select;
mod sql;
mod where_clause;

pub use args::ColumnList;
pub use error::{BuilderErrorList, Error, Result};
pub use from::TableRef;
pub use join::{IntoJoinOn, JoinCriteria, JoinKind, JoinModel, JoinOnCollector};

/// SELECT-билдер. Владеет scope'ами WHERE и HAVING и списком JOIN'ов.
///
/// Ошибки копятся по ходу цепочки и возвращаются из [`build`](Self::build):
/// одна ошибка отдаётся как есть, несколько сворачиваются в `BuilderErrors`.
#[derive(Debug)]
pub struct QueryBuilder {
    pub(crate) distinct: bool,
    pub(crate) columns: Vec<SqlColumn>,
    pub(crate) from_table: Option<TableRef>,
    pub(crate) joins: Vec<JoinModel>,
    pub(crate) where_scope: Option<ScopeCollector>,
    pub(crate) group_by: Vec<SqlColumn>,
    pub(crate) having_scope: Option<ScopeCollector>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    pub(crate) dialect: Dialect,
    pub(crate) builder_errors: SmallVec<[Error; 2]>,
}

/// Собранный SELECT: неизменяемый вход для рендерера.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectModel {
    pub(crate) distinct: bool,
    /// пусто → `SELECT *`
    pub(crate) columns: Vec<SqlColumn>,
    pub(crate) from: Option<TableRef>,
    pub(crate) joins: Vec<JoinModel>,
    /// `Some`: WHERE объявлен (даже если в итоге ничего не отрендерит)
    pub(crate) where_clause: Option<CriteriaGroup>,
    pub(crate) group_by: Vec<SqlColumn>,
    pub(crate) having: Option<CriteriaGroup>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl SelectModel {
    #[inline]
    pub fn where_clause(&self) -> Option<&CriteriaGroup> {
        self.where_clause.as_ref()
    }

    #[inline]
    pub fn having(&self) -> Option<&CriteriaGroup> {
        self.having.as_ref()
    }

    #[inline]
    pub fn joins(&self) -> &[JoinModel] {
        &self.joins
    }

    #[inline]
    pub fn from(&self) -> Option<&TableRef> {
        self.from.as_ref()
    }
}

impl QueryBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::new_empty()
        }
    }

    /// Пустой билдер (Postgres по умолчанию): удобно для замыканий |qb| qb.select(...)
    pub fn new_empty() -> Self {
        Self {
            distinct: false,
            columns: Vec::new(),
            from_table: None,
            joins: Vec::new(),
            where_scope: None,
            group_by: Vec::new(),
            having_scope: None,
            limit: None,
            offset: None,
            dialect: Dialect::Postgres,
            builder_errors: SmallVec::new(),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[inline]
    pub(crate) fn push_builder_error<E: Into<Error>>(&mut self, err: E) {
        self.builder_errors.push(err.into());
    }

    /// Применить замыкание к scope WHERE (создаётся при первом обращении).
    pub(crate) fn update_where<F>(&mut self, f: F)
    where
        F: FnOnce(ScopeCollector) -> ScopeCollector,
    {
        let scope = self.where_scope.take().unwrap_or_default();
        self.where_scope = Some(f(scope));
    }

    pub(crate) fn update_having<F>(&mut self, f: F)
    where
        F: FnOnce(ScopeCollector) -> ScopeCollector,
    {
        let scope = self.having_scope.take().unwrap_or_default();
        self.having_scope = Some(f(scope));
    }

    /// Закрыть все scope'ы и собрать модель.
    pub fn build(mut self) -> Result<SelectModel> {
        let where_clause = match self.where_scope.take().map(ScopeCollector::finish) {
            Some(Ok(group)) => Some(group),
            Some(Err(e)) => {
                self.push_builder_error(e);
                None
            }
            None => None,
        };
        let having = match self.having_scope.take().map(ScopeCollector::finish) {
            Some(Ok(group)) => Some(group),
            Some(Err(e)) => {
                self.push_builder_error(e);
                None
            }
            None => None,
        };

        if !self.builder_errors.is_empty() {
            return Err(collapse_errors(self.builder_errors));
        }

        debug!(
            columns = self.columns.len(),
            joins = self.joins.len(),
            has_where = where_clause.is_some(),
            has_having = having.is_some(),
            "select model built"
        );

        Ok(SelectModel {
            distinct: self.distinct,
            columns: self.columns,
            from: self.from_table,
            joins: self.joins,
            where_clause,
            group_by: self.group_by,
            having,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

fn collapse_errors(mut errors: SmallVec<[Error; 2]>) -> Error {
    if errors.len() == 1 {
        return errors.remove(0);
    }
    Error::BuilderErrors(BuilderErrorList(
        errors.iter().map(ToString::to_string).collect(),
    ))
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new_empty()
    }
}
