use std::{borrow::Cow, collections::HashSet, sync::OnceLock};

use super::config::{Dialect, FoldCase, QuoteMode, SqlRenderCfg};
use super::writer::SqlWriter;
use crate::expression::SqlColumn;
use crate::query_builder::TableRef;

fn is_simple_ident(s: &str) -> bool {
    let mut it = s.chars();
    match it.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    it.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

const COMMON_KEYWORDS: &[&str] = &[
    "select", "from", "where", "group", "having", "order", "by", "limit", "offset", "join",
    "left", "right", "inner", "outer", "full", "on", "as", "and", "or", "not", "exists", "in",
    "is", "null", "between", "like", "user", "table", "index", "key",
];

static KW_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn is_common_keyword(s: &str) -> bool {
    KW_SET
        .get_or_init(|| COMMON_KEYWORDS.iter().copied().collect())
        .contains(&*s.to_ascii_lowercase())
}

fn escape_body(s: &str, dialect: Dialect) -> Cow<'_, str> {
    let q = quote_char(dialect);
    if s.contains(q) {
        let mut doubled = String::with_capacity(2);
        doubled.push(q);
        doubled.push(q);
        Cow::Owned(s.replace(q, &doubled))
    } else {
        Cow::Borrowed(s)
    }
}

#[inline]
fn quote_char(dialect: Dialect) -> char {
    match dialect {
        Dialect::Postgres | Dialect::SQLite => '"',
        Dialect::MySQL => '`',
    }
}

pub fn quote_ident_always(name: &str, dialect: Dialect) -> String {
    let q = quote_char(dialect);
    let body = escape_body(name, dialect);
    let mut out = String::with_capacity(body.len() + 2);
    out.push(q);
    out.push_str(&body);
    out.push(q);
    out
}

pub fn quote_ident(name: &str, cfg: &SqlRenderCfg) -> String {
    let name: Cow<'_, str> = match cfg.fold_idents {
        Some(FoldCase::Lower) => Cow::Owned(name.to_ascii_lowercase()),
        Some(FoldCase::Upper) => Cow::Owned(name.to_ascii_uppercase()),
        None => Cow::Borrowed(name),
    };

    match cfg.quote {
        QuoteMode::Always => quote_ident_always(&name, cfg.dialect),
        QuoteMode::Smart { preserve_case } => {
            if preserve_case || !is_simple_ident(&name) || is_common_keyword(&name) {
                quote_ident_always(&name, cfg.dialect)
            } else {
                name.into_owned()
            }
        }
    }
}

/// schema.table / table.column / schema.table.column
pub fn push_quoted_path<'a, I>(w: &mut SqlWriter, parts: I, cfg: &SqlRenderCfg)
where
    I: IntoIterator<Item = &'a str>,
{
    for (i, p) in parts.into_iter().enumerate() {
        w.push_sep(i, ".");
        if p == "*" {
            w.push_char('*');
        } else {
            w.push(quote_ident(p, cfg));
        }
    }
}

#[inline]
pub fn push_column(w: &mut SqlWriter, column: &SqlColumn, cfg: &SqlRenderCfg) {
    push_quoted_path(w, column.path(), cfg);
}

/// <table> [AS <alias>]
pub fn push_table(w: &mut SqlWriter, table: &TableRef, cfg: &SqlRenderCfg) {
    push_quoted_path(w, table.path(), cfg);
    if let Some(alias) = table.alias() {
        w.push(" AS ");
        w.push(quote_ident(alias, cfg));
    }
}
