use tracing::debug;

use super::config::{Dialect, SqlRenderCfg};
use super::criteria::{render_clause, render_join_on};
use super::error::{Error, Result};
use super::ident::{push_column, push_table};
use super::writer::SqlWriter;
use crate::param::Param;
use crate::query_builder::{JoinKind, JoinModel, SelectModel};

/// Рендер собранного SELECT в SQL + параметры.
pub fn render_select(model: &SelectModel, cfg: &SqlRenderCfg) -> Result<(String, Vec<Param>)> {
    let mut w = SqlWriter::new(256, cfg.placeholders);
    render_select_into(&mut w, model, cfg)?;
    debug!(
        dialect = %cfg.dialect,
        params = w.params.len(),
        "select rendered"
    );
    Ok(w.finish())
}

/// Пишет SELECT в общий writer: используется и для EXISTS-подзапросов,
/// чтобы нумерация плейсхолдеров шла сквозная.
pub(crate) fn render_select_into(
    w: &mut SqlWriter,
    model: &SelectModel,
    cfg: &SqlRenderCfg,
) -> Result<()> {
    w.push("SELECT ");
    if model.distinct {
        w.push("DISTINCT ");
    }

    if model.columns.is_empty() {
        w.push_char('*');
    } else {
        for (i, c) in model.columns.iter().enumerate() {
            w.push_sep(i, ", ");
            push_column(w, c, cfg);
        }
    }

    if let Some(from) = &model.from {
        w.push(" FROM ");
        push_table(w, from, cfg);
    }

    for join in &model.joins {
        render_join(w, join, cfg)?;
    }

    if let Some(group) = &model.where_clause {
        match render_clause(w, group, cfg)? {
            Some(sql) => {
                w.push(" WHERE ");
                w.push(sql);
            }
            None if !cfg.non_rendering_where_allowed => {
                return Err(Error::NonRenderingWhereClause);
            }
            None => {}
        }
    }

    if !model.group_by.is_empty() {
        w.push(" GROUP BY ");
        for (i, c) in model.group_by.iter().enumerate() {
            w.push_sep(i, ", ");
            push_column(w, c, cfg);
        }
    }

    if let Some(group) = &model.having {
        if let Some(sql) = render_clause(w, group, cfg)? {
            w.push(" HAVING ");
            w.push(sql);
        }
    }

    match (model.limit, model.offset) {
        (Some(l), Some(o)) => {
            w.push(" LIMIT ");
            w.push_u64(l);
            w.push(" OFFSET ");
            w.push_u64(o);
        }
        (Some(l), None) => {
            w.push(" LIMIT ");
            w.push_u64(l);
        }
        (None, Some(o)) => {
            // MySQL не умеет OFFSET без LIMIT
            if matches!(cfg.dialect, Dialect::MySQL) {
                w.push(" LIMIT 18446744073709551615");
            }
            w.push(" OFFSET ");
            w.push_u64(o);
        }
        (None, None) => {}
    }

    Ok(())
}

fn render_join(w: &mut SqlWriter, join: &JoinModel, cfg: &SqlRenderCfg) -> Result<()> {
    match (join.kind, cfg.dialect) {
        (JoinKind::Full, Dialect::MySQL | Dialect::SQLite) => {
            return Err(Error::UnsupportedFeature {
                feature: "FULL OUTER JOIN".into(),
                dialect: cfg.dialect,
            });
        }
        (JoinKind::Right, Dialect::SQLite) => {
            return Err(Error::UnsupportedFeature {
                feature: "RIGHT JOIN".into(),
                dialect: cfg.dialect,
            });
        }
        _ => {}
    }

    w.push_char(' ');
    w.push(join.kind.as_sql());
    w.push_char(' ');
    push_table(w, &join.table, cfg);

    let criteria = &join.criteria;
    match render_join_on(w, &criteria.on, &criteria.sub_criteria, cfg)? {
        Some(sql) => {
            w.push(" ON ");
            w.push(sql);
            Ok(())
        }
        None => Err(Error::NonRenderingJoinCondition {
            table: join.table.name.clone(),
        }),
    }
}
