use sqlparser::ast::Expr as SqlExpr;

use crate::expression::ColumnCondition;
use crate::query_builder::SelectModel;

/// Связка перед критерием. У начального критерия scope её нет.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_sql(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// Один узел-предикат. Валидации здесь нет: все инварианты проверяет
/// [`ScopeCollector`](super::ScopeCollector), а списочный путь их обходит.
///
/// Рендерер матчит варианты исчерпывающе, так что новый вариант не
/// скомпилируется, пока его не научат рендерить.
#[derive(Clone, Debug, PartialEq)]
pub enum CriterionNode {
    Condition(ColumnCondition),
    Exists(Box<SelectModel>),
    NotExists(Box<SelectModel>),
    Not(Box<CriteriaGroup>),
    Group(Box<CriteriaGroup>),
    Raw(RawCriterion),
}

impl From<ColumnCondition> for CriterionNode {
    fn from(c: ColumnCondition) -> Self {
        CriterionNode::Condition(c)
    }
}

/// Сырой предикат, уже разобранный sqlparser'ом (GenericDialect).
#[derive(Clone, Debug, PartialEq)]
pub struct RawCriterion {
    pub(crate) expr: SqlExpr,
}

impl RawCriterion {
    pub(crate) fn new(expr: SqlExpr) -> Self {
        Self { expr }
    }

    #[inline]
    pub fn expr(&self) -> &SqlExpr {
        &self.expr
    }
}

/// Закрытый scope без собственной связки: начальный критерий + подгруппы.
///
/// Так выглядят WHERE/HAVING целиком и содержимое `Not`/`Group`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriteriaGroup {
    pub(crate) initial: Option<Box<CriterionNode>>,
    pub(crate) sub_criteria: Vec<ConnectedAggregate>,
}

impl CriteriaGroup {
    pub fn new(initial: Option<CriterionNode>, sub_criteria: Vec<ConnectedAggregate>) -> Self {
        Self {
            initial: initial.map(Box::new),
            sub_criteria,
        }
    }

    #[inline]
    pub fn initial(&self) -> Option<&CriterionNode> {
        self.initial.as_deref()
    }

    #[inline]
    pub fn sub_criteria(&self) -> &[ConnectedAggregate] {
        &self.sub_criteria
    }

    /// Нет ни начального критерия, ни подгрупп.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.sub_criteria.is_empty()
    }

    /// Навесить связку, превратив scope в элемент чужого scope.
    pub fn connect(self, connector: Connector) -> ConnectedAggregate {
        ConnectedAggregate {
            connector,
            initial: self.initial,
            sub_criteria: self.sub_criteria,
        }
    }
}

/// Результат `and { }` / `or { }` / `and(list)` / `or(list)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectedAggregate {
    pub(crate) connector: Connector,
    pub(crate) initial: Option<Box<CriterionNode>>,
    pub(crate) sub_criteria: Vec<ConnectedAggregate>,
}

impl ConnectedAggregate {
    pub fn new(
        connector: Connector,
        initial: Option<CriterionNode>,
        sub_criteria: Vec<ConnectedAggregate>,
    ) -> Self {
        Self {
            connector,
            initial: initial.map(Box::new),
            sub_criteria,
        }
    }

    #[inline]
    pub fn connector(&self) -> Connector {
        self.connector
    }

    #[inline]
    pub fn initial(&self) -> Option<&CriterionNode> {
        self.initial.as_deref()
    }

    #[inline]
    pub fn sub_criteria(&self) -> &[ConnectedAggregate] {
        &self.sub_criteria
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.sub_criteria.is_empty()
    }
}
