use sqlparser::ast::{Expr as SqlExpr, SetExpr, Statement};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

use crate::criteria::{Error, Result};

/// Разобрать булево выражение через `SELECT 1 WHERE <s>` (GenericDialect).
pub(crate) fn parse_where_expr(s: &str) -> Result<SqlExpr> {
    if s.trim().is_empty() {
        return Err(Error::InvalidExpression {
            reason: "empty raw predicate".into(),
        });
    }

    let dialect = GenericDialect {};
    let sql = format!("SELECT 1 WHERE {s}");

    let stmts = Parser::parse_sql(&dialect, &sql).map_err(|e| Error::InvalidExpression {
        reason: e.to_string().into(),
    })?;
    if stmts.len() != 1 {
        // "a = 1; DROP TABLE x" и прочие хвосты
        return Err(Error::InvalidExpression {
            reason: "raw predicate must be a single expression".into(),
        });
    }
    let stmt = stmts
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidExpression {
            reason: "empty parse".into(),
        })?;

    // ORDER BY / LIMIT / GROUP BY / HAVING и прочие хвосты парсер примет,
    // но в предикат они не попадут: такой фрагмент отвергаем
    let printed = stmt.to_string();

    let selection = match stmt {
        Statement::Query(q) => match *q.body {
            SetExpr::Select(sel) => sel.selection.ok_or_else(|| Error::InvalidExpression {
                reason: "no where".into(),
            })?,
            _ => {
                return Err(Error::InvalidExpression {
                    reason: "unexpected setexpr".into(),
                });
            }
        },
        _ => {
            return Err(Error::InvalidExpression {
                reason: "unexpected statement".into(),
            });
        }
    };

    if printed != format!("SELECT 1 WHERE {selection}") {
        return Err(Error::InvalidExpression {
            reason: "raw predicate must not carry clauses beyond the expression".into(),
        });
    }
    Ok(selection)
}
