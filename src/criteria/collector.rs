use tracing::trace;

use super::list;
use super::node::{ConnectedAggregate, Connector, CriteriaGroup, CriterionNode, RawCriterion};
use super::{Error, Result};
use crate::expression::{ColumnCondition, Condition, SqlColumn};
use crate::query_builder::QueryBuilder;
use crate::utils::parse_where_expr;

/// Сборщик одного scope.
///
/// Одноразовый: создаётся на входе в замыкание, наполняется цепочкой вызовов
/// и закрывается через [`finish`](Self::finish). Начальный критерий ставится
/// ровно один раз: условием, `exists`, `not`, `group` или `raw`. Всё
/// остальное идёт через `and` / `or`.
///
/// Первая ошибка «отравляет» сборщик: дальнейшие вызовы ничего не делают,
/// а `finish()` вернёт именно её.
#[derive(Debug, Default)]
pub struct ScopeCollector {
    initial: Option<CriterionNode>,
    sub_criteria: Vec<ConnectedAggregate>,
    error: Option<Error>,
}

/// То, что можно «проиграть» на свежем scope:
/// - готовое условие: `col("a").is_equal_to(1)`
/// - замыкание: `|c: ScopeCollector| c.condition(...).or(...)`
///
/// Тип аргумента замыкания компилятор через blanket-impl не выводит,
/// его нужно указать явно.
pub trait IntoScope {
    fn apply_to(self, scope: ScopeCollector) -> ScopeCollector;
}

impl IntoScope for ColumnCondition {
    #[inline]
    fn apply_to(self, scope: ScopeCollector) -> ScopeCollector {
        scope.condition(self)
    }
}

impl<F> IntoScope for F
where
    F: FnOnce(ScopeCollector) -> ScopeCollector,
{
    #[inline]
    fn apply_to(self, scope: ScopeCollector) -> ScopeCollector {
        self(scope)
    }
}

impl ScopeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Поставить начальный критерий. Повторный вызов → `DuplicateInitialCriterion`,
    /// уже стоящий критерий не трогается.
    pub fn try_set_initial(&mut self, node: CriterionNode) -> Result<()> {
        if self.initial.is_some() {
            return Err(Error::DuplicateInitialCriterion);
        }
        self.initial = Some(node);
        Ok(())
    }

    #[inline]
    pub fn has_initial(&self) -> bool {
        self.initial.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.sub_criteria.is_empty()
    }

    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.error.is_some()
    }

    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Запоминаем только первую ошибку.
    pub(crate) fn record_error(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Добавить подгруппу как есть, без проверки начального критерия.
    pub(crate) fn push_sub_criterion(&mut self, aggregate: ConnectedAggregate) {
        if self.error.is_none() {
            self.sub_criteria.push(aggregate);
        }
    }

    fn set_initial(mut self, node: CriterionNode) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(e) = self.try_set_initial(node) {
            self.record_error(e);
        }
        self
    }

    /// Прогнать вложенный scope на свежем сборщике.
    /// Ошибка вложенного scope переезжает в текущий.
    fn nested<S: IntoScope>(&mut self, scope: S) -> Option<CriteriaGroup> {
        match scope.apply_to(ScopeCollector::new()).finish() {
            Ok(group) => Some(group),
            Err(e) => {
                self.record_error(e);
                None
            }
        }
    }

    fn connect<S: IntoScope>(mut self, connector: Connector, scope: S) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Some(group) = self.nested(scope) {
            self.sub_criteria.push(group.connect(connector));
        }
        self
    }

    // ---------- начальный критерий ----------

    /// `<column> <predicate>` как начальный критерий.
    pub fn condition(self, cond: ColumnCondition) -> Self {
        self.set_initial(CriterionNode::Condition(cond))
    }

    /// То же, что `condition`, но колонка и предикат передаются раздельно.
    pub fn where_column(self, column: SqlColumn, condition: Condition) -> Self {
        self.condition(ColumnCondition::new(column, condition))
    }

    /// Сырой предикат. Проверяется sqlparser'ом (через `SELECT 1 WHERE <raw>`).
    pub fn raw(mut self, sql: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        match parse_where_expr(sql) {
            Ok(expr) => self.set_initial(CriterionNode::Raw(RawCriterion::new(expr))),
            Err(e) => {
                self.record_error(e);
                self
            }
        }
    }

    /// EXISTS (<подзапрос>). Подзапрос строится отдельным, независимым билдером.
    pub fn exists<F>(self, sub: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.exists_internal(sub, false)
    }

    /// NOT EXISTS (<подзапрос>)
    pub fn not_exists<F>(self, sub: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.exists_internal(sub, true)
    }

    fn exists_internal<F>(mut self, sub: F, negated: bool) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        if self.error.is_some() {
            return self;
        }
        match sub(QueryBuilder::new_empty()).build() {
            Ok(model) => {
                let node = if negated {
                    CriterionNode::NotExists(Box::new(model))
                } else {
                    CriterionNode::Exists(Box::new(model))
                };
                self.set_initial(node)
            }
            Err(e) => {
                self.record_error(Error::Subquery(Box::new(e)));
                self
            }
        }
    }

    /// NOT <scope>
    pub fn not<S: IntoScope>(mut self, scope: S) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.nested(scope) {
            Some(group) => self.set_initial(CriterionNode::Not(Box::new(group))),
            None => self,
        }
    }

    /// NOT <готовый список>
    pub fn not_list<I>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        let group = CriteriaGroup::new(None, criteria.into_iter().collect());
        self.set_initial(CriterionNode::Not(Box::new(group)))
    }

    /// Явная группа `( <scope> )`
    pub fn group<S: IntoScope>(mut self, scope: S) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.nested(scope) {
            Some(group) => self.set_initial(CriterionNode::Group(Box::new(group))),
            None => self,
        }
    }

    /// Явная группа из готового списка
    pub fn group_list<I>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        let group = CriteriaGroup::new(None, criteria.into_iter().collect());
        self.set_initial(CriterionNode::Group(Box::new(group)))
    }

    // ---------- связанные подгруппы ----------

    /// AND <scope>. Можно вызывать сколько угодно раз.
    pub fn and<S: IntoScope>(self, scope: S) -> Self {
        self.connect(Connector::And, scope)
    }

    /// OR <scope>
    pub fn or<S: IntoScope>(self, scope: S) -> Self {
        self.connect(Connector::Or, scope)
    }

    /// AND (<готовый список>): без проверки начального критерия.
    pub fn and_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        list::splice(&mut self, Connector::And, criteria);
        self
    }

    /// OR (<готовый список>)
    pub fn or_list<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = ConnectedAggregate>,
    {
        list::splice(&mut self, Connector::Or, criteria);
        self
    }

    /// Закрыть scope.
    pub fn finish(self) -> Result<CriteriaGroup> {
        if let Some(e) = self.error {
            return Err(e);
        }
        trace!(
            initial = self.initial.is_some(),
            sub_criteria = self.sub_criteria.len(),
            "criteria scope finished"
        );
        Ok(CriteriaGroup::new(self.initial, self.sub_criteria))
    }
}
