use crate::criteria::{ConnectedAggregate, CriterionNode, Error, IntoScope, Result, ScopeCollector};
use crate::expression::ColumnCondition;

/// ON-критерии одного JOIN: обязательное условие `on` + связанные хвосты.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinCriteria {
    pub(crate) on: ColumnCondition,
    pub(crate) sub_criteria: Vec<ConnectedAggregate>,
}

impl JoinCriteria {
    #[inline]
    pub fn on(&self) -> &ColumnCondition {
        &self.on
    }

    #[inline]
    pub fn sub_criteria(&self) -> &[ConnectedAggregate] {
        &self.sub_criteria
    }
}

/// Билдер для замыкания: |on| on.on(...).and(...).or(...)
///
/// Тот же `ScopeCollector`, только политика строже: начальный критерий (ON)
/// обязателен и ставится ровно один раз.
#[derive(Debug, Default)]
pub struct JoinOnCollector {
    scope: ScopeCollector,
}

impl JoinOnCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// ON <cond>. Второй вызов → `DuplicateOnCondition`.
    pub fn on(mut self, cond: ColumnCondition) -> Self {
        if self.scope.is_poisoned() {
            return self;
        }
        match self.scope.try_set_initial(CriterionNode::Condition(cond)) {
            Ok(()) => {}
            Err(Error::DuplicateInitialCriterion) => {
                self.scope.record_error(Error::DuplicateOnCondition);
            }
            Err(e) => self.scope.record_error(e),
        }
        self
    }

    /// AND <cond>
    pub fn and(mut self, cond: ColumnCondition) -> Self {
        self.scope = self.scope.and(cond);
        self
    }

    /// OR <cond>
    pub fn or(mut self, cond: ColumnCondition) -> Self {
        self.scope = self.scope.or(cond);
        self
    }

    /// AND <scope>: вложенная группа по обычным правилам scope
    pub fn and_group<S: IntoScope>(mut self, scope: S) -> Self {
        self.scope = self.scope.and(scope);
        self
    }

    /// OR <scope>
    pub fn or_group<S: IntoScope>(mut self, scope: S) -> Self {
        self.scope = self.scope.or(scope);
        self
    }

    #[inline]
    pub fn has_on(&self) -> bool {
        self.scope.has_initial()
    }

    /// Без ON → `MissingOnCondition`.
    pub fn build(self) -> Result<JoinCriteria> {
        let group = self.scope.finish()?;
        let sub_criteria = group.sub_criteria;
        match group.initial.map(|b| *b) {
            Some(CriterionNode::Condition(on)) => Ok(JoinCriteria { on, sub_criteria }),
            // через публичный API сюда попасть нельзя: `on` принимает только условие
            Some(_) => Err(Error::InvalidExpression {
                reason: "JOIN ON must start with a column condition".into(),
            }),
            None => Err(Error::MissingOnCondition),
        }
    }
}

/// Что можно передать вторым аргументом в join():
/// - одиночное условие: `col("u.id").is_equal_to_column(col("a.user_id"))`
/// - замыкание: `|on: JoinOnCollector| on.on(...).and(...)`
pub trait IntoJoinOn {
    fn apply_to(self, on: JoinOnCollector) -> JoinOnCollector;
}

impl IntoJoinOn for ColumnCondition {
    #[inline]
    fn apply_to(self, on: JoinOnCollector) -> JoinOnCollector {
        on.on(self)
    }
}

impl<F> IntoJoinOn for F
where
    F: FnOnce(JoinOnCollector) -> JoinOnCollector,
{
    #[inline]
    fn apply_to(self, on: JoinOnCollector) -> JoinOnCollector {
        self(on)
    }
}
