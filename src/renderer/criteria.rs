//! Рендер дерева критериев.
//!
//! Каждый элемент списка (начальный критерий, затем подгруппы) рендерится
//! в отдельный фрагмент со своей связкой. У первого отрендеренного элемента
//! связка не печатается. Подгруппа / `Group` / `Not` берутся в скобки только
//! если внутри больше одного фрагмента. Верхний уровень клаузы в скобки не
//! берётся никогда.

use smallvec::SmallVec;
use sqlparser::ast::{BinaryOperator, Expr as SqlExpr, UnaryOperator};

use super::config::SqlRenderCfg;
use super::error::{Error, Result};
use super::ident::push_column;
use super::select::render_select_into;
use super::writer::SqlWriter;
use crate::criteria::{ConnectedAggregate, Connector, CriteriaGroup, CriterionNode};
use crate::expression::{ColumnCondition, Condition};
use crate::param::Param;
use crate::query_builder::SelectModel;

struct RenderedCriterion {
    connector: Option<Connector>,
    fragment: String,
}

type Rendered = SmallVec<[RenderedCriterion; 4]>;

/// Отрендерить отдельно взятую группу (WHERE/HAVING без SELECT вокруг).
/// `None`: группа ничего не дала.
pub fn render_criteria(
    group: &CriteriaGroup,
    cfg: &SqlRenderCfg,
) -> Result<Option<(String, Vec<Param>)>> {
    let mut w = SqlWriter::new(128, cfg.placeholders);
    match render_clause(&mut w, group, cfg)? {
        Some(sql) => Ok(Some((sql, w.params))),
        None => Ok(None),
    }
}

/// Верхний уровень клаузы: элементы через связки, без внешних скобок.
pub(crate) fn render_clause(
    w: &mut SqlWriter,
    group: &CriteriaGroup,
    cfg: &SqlRenderCfg,
) -> Result<Option<String>> {
    let elems = render_elements(w, group.initial(), group.sub_criteria(), cfg)?;
    Ok(join_elements(&elems))
}

/// ON <cond> [AND|OR ...]: тоже верхний уровень, без скобок.
pub(crate) fn render_join_on(
    w: &mut SqlWriter,
    on: &ColumnCondition,
    sub_criteria: &[ConnectedAggregate],
    cfg: &SqlRenderCfg,
) -> Result<Option<String>> {
    let mut elems = Rendered::new();
    if let Some(fragment) = render_condition(w, on, cfg)? {
        elems.push(RenderedCriterion {
            connector: None,
            fragment,
        });
    }
    render_sub_criteria(w, sub_criteria, cfg, &mut elems)?;
    Ok(join_elements(&elems))
}

fn render_elements(
    w: &mut SqlWriter,
    initial: Option<&CriterionNode>,
    sub_criteria: &[ConnectedAggregate],
    cfg: &SqlRenderCfg,
) -> Result<Rendered> {
    let mut out = Rendered::new();
    if let Some(node) = initial {
        if let Some(fragment) = render_node(w, node, cfg)? {
            out.push(RenderedCriterion {
                connector: None,
                fragment,
            });
        }
    }
    render_sub_criteria(w, sub_criteria, cfg, &mut out)?;
    Ok(out)
}

fn render_sub_criteria(
    w: &mut SqlWriter,
    sub_criteria: &[ConnectedAggregate],
    cfg: &SqlRenderCfg,
    out: &mut Rendered,
) -> Result<()> {
    for sub in sub_criteria {
        if let Some(fragment) = render_aggregate(w, sub, cfg)? {
            out.push(RenderedCriterion {
                connector: Some(sub.connector()),
                fragment,
            });
        }
    }
    Ok(())
}

fn join_elements(elems: &[RenderedCriterion]) -> Option<String> {
    if elems.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (i, e) in elems.iter().enumerate() {
        if i > 0 {
            // без связки бывает только начальный критерий, а он всегда первый
            let connector = e.connector.unwrap_or(Connector::And);
            out.push(' ');
            out.push_str(connector.as_sql());
            out.push(' ');
        }
        out.push_str(&e.fragment);
    }
    Some(out)
}

/// Скобки только вокруг двух и более элементов.
fn wrap_lazily(elems: &[RenderedCriterion]) -> Option<String> {
    let joined = join_elements(elems)?;
    if elems.len() > 1 {
        Some(format!("({joined})"))
    } else {
        Some(joined)
    }
}

fn render_aggregate(
    w: &mut SqlWriter,
    aggregate: &ConnectedAggregate,
    cfg: &SqlRenderCfg,
) -> Result<Option<String>> {
    let elems = render_elements(w, aggregate.initial(), aggregate.sub_criteria(), cfg)?;
    Ok(wrap_lazily(&elems))
}

fn render_node(w: &mut SqlWriter, node: &CriterionNode, cfg: &SqlRenderCfg) -> Result<Option<String>> {
    match node {
        CriterionNode::Condition(c) => render_condition(w, c, cfg),
        CriterionNode::Exists(sub) => render_exists(w, sub, false, cfg).map(Some),
        CriterionNode::NotExists(sub) => render_exists(w, sub, true, cfg).map(Some),
        CriterionNode::Not(group) => {
            let elems = render_elements(w, group.initial(), group.sub_criteria(), cfg)?;
            Ok(wrap_lazily(&elems).map(|f| format!("NOT {f}")))
        }
        CriterionNode::Group(group) => {
            let elems = render_elements(w, group.initial(), group.sub_criteria(), cfg)?;
            Ok(wrap_lazily(&elems))
        }
        CriterionNode::Raw(raw) => Ok(Some(render_raw(raw.expr()))),
    }
}

/// Сырой предикат со связкой верхнего уровня (AND/OR/XOR/NOT) берём в скобки,
/// иначе соседний коннектор или `NOT` поменяет смысл.
fn render_raw(expr: &SqlExpr) -> String {
    let compound = match expr {
        SqlExpr::BinaryOp { op, .. } => {
            matches!(op, BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor)
        }
        SqlExpr::UnaryOp { op, .. } => matches!(op, UnaryOperator::Not),
        _ => false,
    };
    if compound {
        format!("({expr})")
    } else {
        expr.to_string()
    }
}

fn render_exists(
    w: &mut SqlWriter,
    sub: &SelectModel,
    negated: bool,
    cfg: &SqlRenderCfg,
) -> Result<String> {
    w.capture(|w| {
        w.push(if negated { "NOT EXISTS (" } else { "EXISTS (" });
        render_select_into(w, sub, cfg)?;
        w.push_char(')');
        Ok(())
    })
}

fn render_condition(
    w: &mut SqlWriter,
    cond: &ColumnCondition,
    cfg: &SqlRenderCfg,
) -> Result<Option<String>> {
    if !cond.is_renderable() {
        return Ok(None);
    }

    let fragment = w.capture(|w| {
        push_column(w, cond.column(), cfg);
        match cond.condition() {
            Condition::Compare { op, value } => {
                w.push_char(' ');
                w.push(op.as_sql());
                w.push_char(' ');
                w.push_param(value.clone());
            }
            Condition::CompareColumn { op, column } => {
                w.push_char(' ');
                w.push(op.as_sql());
                w.push_char(' ');
                push_column(w, column, cfg);
            }
            Condition::Null { negated } => {
                w.push(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Condition::In {
                values, negated, ..
            } => {
                if values.is_empty() {
                    return Err(Error::EmptyInList {
                        column: cond.column().to_string(),
                    });
                }
                w.push(if *negated { " NOT IN (" } else { " IN (" });
                for (i, v) in values.iter().enumerate() {
                    w.push_sep(i, ", ");
                    w.push_param(v.clone());
                }
                w.push_char(')');
            }
            Condition::Between { low, high, negated } => {
                w.push(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                w.push_param(low.clone());
                w.push(" AND ");
                w.push_param(high.clone());
            }
            Condition::Like { pattern, negated } => {
                w.push(if *negated { " NOT LIKE " } else { " LIKE " });
                w.push_param(pattern.clone());
            }
            // отсеяно через is_renderable()
            Condition::Absent => {}
        }
        Ok(())
    })?;

    Ok(Some(fragment))
}
