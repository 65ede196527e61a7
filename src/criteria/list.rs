//! Списочный путь: критерии, собранные обычным кодом вне замыканий.
//!
//! Элементы списка уже несут свою связку, начального критерия у обёртки нет,
//! поэтому проверка «один начальный критерий на scope» здесь не выполняется
//! вовсе. `and_list` / `or_list` никогда не падают с `DuplicateInitialCriterion`,
//! даже если у scope уже есть начальный критерий.

use super::collector::{IntoScope, ScopeCollector};
use super::node::{ConnectedAggregate, Connector};
use super::Result;
use crate::expression::ColumnCondition;

/// Вклеить список в scope одной подгруппой с заданной связкой.
pub fn splice<I>(target: &mut ScopeCollector, connector: Connector, criteria: I)
where
    I: IntoIterator<Item = ConnectedAggregate>,
{
    target.push_sub_criterion(ConnectedAggregate::new(
        connector,
        None,
        criteria.into_iter().collect(),
    ));
}

/// `AND <cond>` как самостоятельный элемент списка.
pub fn and_condition(cond: ColumnCondition) -> ConnectedAggregate {
    ConnectedAggregate::new(Connector::And, Some(cond.into()), Vec::new())
}

/// `OR <cond>` как самостоятельный элемент списка.
pub fn or_condition(cond: ColumnCondition) -> ConnectedAggregate {
    ConnectedAggregate::new(Connector::Or, Some(cond.into()), Vec::new())
}

/// `AND <scope>` вне билдера: scope проверяется как обычно.
pub fn and_group<S: IntoScope>(scope: S) -> Result<ConnectedAggregate> {
    connected(Connector::And, scope)
}

/// `OR <scope>` вне билдера.
pub fn or_group<S: IntoScope>(scope: S) -> Result<ConnectedAggregate> {
    connected(Connector::Or, scope)
}

fn connected<S: IntoScope>(connector: Connector, scope: S) -> Result<ConnectedAggregate> {
    let group = scope.apply_to(ScopeCollector::new()).finish()?;
    Ok(group.connect(connector))
}
