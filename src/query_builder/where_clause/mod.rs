mod __tests__;

use crate::criteria::{ConnectedAggregate, IntoScope};
use crate::query_builder::QueryBuilder;

impl QueryBuilder {
    /// WHERE <scope>
    ///
    /// Принимает всё, что реализует `IntoScope`:
    /// - одиночное условие: `.r#where(col("a").is_equal_to(1))`
    /// - замыкание: `.r#where(|w: ScopeCollector| w.condition(...).or(...))`
    ///
    /// Повторный `where` с начальным критерием: это второй начальный
    /// критерий того же scope, `build()` вернёт `DuplicateInitialCriterion`.
    pub fn r#where<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_where(|w| scope.apply_to(w));
        self
    }

    #[inline]
    /// Синоним `r#where`.
    pub fn where_<S: IntoScope>(self, scope: S) -> Self {
        self.r#where(scope)
    }

    /// AND <scope>
    pub fn and_where<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_where(|w| w.and(scope));
        self
    }

    /// OR <scope>
    pub fn or_where<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_where(|w| w.or(scope));
        self
    }

    /// WHERE NOT <scope>
    pub fn where_not<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_where(|w| w.not(scope));
        self
    }

    /// WHERE ( <scope> )
    pub fn where_group<S: IntoScope>(mut self, scope: S) -> Self {
        self.update_where(|w| w.group(scope));
        self
    }

    /// WHERE EXISTS (<подзапрос>)
    pub fn where_exists<F>(mut self, sub: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.update_where(|w| w.exists(sub));
        self
    }

    /// WHERE NOT EXISTS (<подзапрос>)
    pub fn where_not_exists<F>(mut self, sub: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.update_where(|w| w.not_exists(sub));
        self
    }

    /// WHERE <raw SQL>: парсится GenericDialect'ом (через `SELECT 1 WHERE <raw>`).
    pub fn where_raw(mut self, raw: &str) -> Self {
        self.update_where(|w| w.raw(raw));
        self
    }

    /// AND (<готовый список>): начальный критерий не проверяется.
    pub fn and_where_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        self.update_where(|w| w.and_list(criteria));
        self
    }

    /// OR (<готовый список>)
    pub fn or_where_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        self.update_where(|w| w.or_list(criteria));
        self
    }
}
