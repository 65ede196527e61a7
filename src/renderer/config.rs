use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    SQLite,
    MySQL,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::SQLite => write!(f, "sqlite"),
            Dialect::MySQL => write!(f, "mysql"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteMode {
    /// Всегда квотить идентификаторы (как knex): "Users", `Users`
    Always,
    /// Квотить только при необходимости; при preserve_case=true квотим всегда
    Smart { preserve_case: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// $1, $2, $3... (Postgres)
    Numbered,
    /// ? (SQLite/MySQL)
    Question,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldCase {
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct SqlRenderCfg {
    pub dialect: Dialect,
    pub quote: QuoteMode,
    pub placeholders: PlaceholderStyle,

    /// Принудительная нормализация идентификаторов
    pub fold_idents: Option<FoldCase>,

    /// Объявленный, но пустой WHERE (все условия отфильтрованы):
    /// молча опустить клаузу (true) или упасть `NonRenderingWhereClause` (false)
    pub non_rendering_where_allowed: bool,
}

impl Default for SqlRenderCfg {
    fn default() -> Self {
        Self {
            dialect: Dialect::Postgres,
            quote: QuoteMode::Smart {
                preserve_case: false,
            },
            placeholders: PlaceholderStyle::Question,
            fold_idents: None,
            non_rendering_where_allowed: true,
        }
    }
}
