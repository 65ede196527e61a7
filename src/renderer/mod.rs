mod config;
mod criteria;
mod error;
mod ident;
mod select;
mod writer;

pub use config::{Dialect, FoldCase, PlaceholderStyle, QuoteMode, SqlRenderCfg};
pub use criteria::render_criteria;
pub use error::{Error, Result};
pub use select::render_select;

/// Удобные пресеты под диалекты
pub fn cfg_postgres() -> SqlRenderCfg {
    SqlRenderCfg {
        dialect: Dialect::Postgres,
        quote: QuoteMode::Always,
        placeholders: PlaceholderStyle::Numbered,
        fold_idents: None,
        non_rendering_where_allowed: true,
    }
}
pub fn cfg_mysql() -> SqlRenderCfg {
    SqlRenderCfg {
        dialect: Dialect::MySQL,
        quote: QuoteMode::Always,
        placeholders: PlaceholderStyle::Question,
        fold_idents: None,
        non_rendering_where_allowed: true,
    }
}
pub fn cfg_sqlite() -> SqlRenderCfg {
    SqlRenderCfg {
        dialect: Dialect::SQLite,
        quote: QuoteMode::Always,
        placeholders: PlaceholderStyle::Question,
        fold_idents: None,
        non_rendering_where_allowed: true,
    }
}

pub fn cfg_for(dialect: Dialect) -> SqlRenderCfg {
    match dialect {
        Dialect::Postgres => cfg_postgres(),
        Dialect::MySQL => cfg_mysql(),
        Dialect::SQLite => cfg_sqlite(),
    }
}
