//! Дерево критериев для WHERE / HAVING / JOIN ON.
//!
//! Один scope (одно замыкание `|c: ScopeCollector| ...`) соответствует одному [`ScopeCollector`]:
//! максимум один начальный критерий (условие, `exists`, `not`, `group`)
//! плюс сколько угодно `and` / `or` подгрупп. Готовые списки
//! [`ConnectedAggregate`] вливаются через [`list`] в обход проверки
//! начального критерия.

mod __tests__;
mod collector;
mod error;
pub mod list;
mod node;

pub use collector::{IntoScope, ScopeCollector};
pub use error::{Error, Result};
pub use node::{ConnectedAggregate, Connector, CriteriaGroup, CriterionNode, RawCriterion};
