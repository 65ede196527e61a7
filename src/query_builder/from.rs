use std::borrow::Cow;

use super::{Error, QueryBuilder, Result};

/// Ссылка на таблицу: `users`, `public.users`, `users u`, `users AS u`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRef {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
}

impl TableRef {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (name, alias) = match parts.as_slice() {
            [name] => (*name, None),
            [name, alias] => (*name, Some(*alias)),
            [name, kw, alias] if kw.eq_ignore_ascii_case("as") => (*name, Some(*alias)),
            _ => {
                return Err(Error::InvalidExpression {
                    reason: Cow::Owned(format!("invalid table reference: {s:?}")),
                });
            }
        };
        Ok(Self {
            name: name.to_string(),
            alias: alias.map(str::to_string),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// schema.table → ["schema", "table"]
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

impl QueryBuilder {
    /// FROM <table> [AS alias]
    pub fn from(mut self, table: &str) -> Self {
        match TableRef::parse(table) {
            Ok(t) => self.from_table = Some(t),
            Err(e) => self.push_builder_error(e),
        }
        self
    }
}
