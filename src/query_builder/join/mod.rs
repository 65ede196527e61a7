mod on_builder;

pub use on_builder::{IntoJoinOn, JoinCriteria, JoinOnCollector};

use crate::query_builder::{QueryBuilder, TableRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JoinModel {
    pub(crate) kind: JoinKind,
    pub(crate) table: TableRef,
    pub(crate) criteria: JoinCriteria,
}

impl JoinModel {
    #[inline]
    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    #[inline]
    pub fn table(&self) -> &TableRef {
        &self.table
    }

    #[inline]
    pub fn criteria(&self) -> &JoinCriteria {
        &self.criteria
    }
}

impl QueryBuilder {
    /// INNER JOIN <target> ON <criteria>
    ///
    /// Примеры:
    ///   .join("accounts a", col("users.id").is_equal_to_column(col("a.user_id")))
    ///   .join("accounts a", |on: JoinOnCollector| on.on(...).and(...))
    pub fn join<O: IntoJoinOn>(self, target: &str, on: O) -> Self {
        self.push_join_internal(JoinKind::Inner, target, on)
    }

    /// LEFT JOIN <target> ON <criteria>
    pub fn left_join<O: IntoJoinOn>(self, target: &str, on: O) -> Self {
        self.push_join_internal(JoinKind::Left, target, on)
    }

    /// RIGHT JOIN <target> ON <criteria>
    pub fn right_join<O: IntoJoinOn>(self, target: &str, on: O) -> Self {
        self.push_join_internal(JoinKind::Right, target, on)
    }

    /// FULL OUTER JOIN <target> ON <criteria>
    pub fn full_join<O: IntoJoinOn>(self, target: &str, on: O) -> Self {
        self.push_join_internal(JoinKind::Full, target, on)
    }

    fn push_join_internal<O: IntoJoinOn>(mut self, kind: JoinKind, target: &str, on: O) -> Self {
        let table = match TableRef::parse(target) {
            Ok(t) => t,
            Err(e) => {
                self.push_builder_error(e);
                return self;
            }
        };

        match on.apply_to(JoinOnCollector::new()).build() {
            Ok(criteria) => self.joins.push(JoinModel {
                kind,
                table,
                criteria,
            }),
            Err(e) => self.push_builder_error(e),
        }
        self
    }
}
