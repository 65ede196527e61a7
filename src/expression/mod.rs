mod __tests__;
pub mod cmp;

pub use cmp::{CmpOp, ColumnCondition, Condition};

/// Ссылка на колонку: `col("id")`, `col("users.id")`, `col("public.users.id")`.
///
/// Всё, что левее последней точки, считается квалификатором (таблица/алиас/схема).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SqlColumn {
    pub(crate) qualifier: Option<String>,
    pub(crate) name: String,
}

impl SqlColumn {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified<Q, S>(qualifier: Q, name: S) -> Self
    where
        Q: Into<String>,
        S: Into<String>,
    {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Части пути для квотирования: ["schema", "table", "col"]
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.qualifier
            .as_deref()
            .into_iter()
            .flat_map(|q| q.split('.'))
            .chain(std::iter::once(self.name.as_str()))
    }

    /// Та же колонка под другим квалификатором (удобно для алиасов в JOIN).
    pub fn with_qualifier<Q: Into<String>>(mut self, qualifier: Q) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

impl std::fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{q}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for SqlColumn {
    fn from(s: &str) -> Self {
        col(s)
    }
}

impl From<String> for SqlColumn {
    fn from(s: String) -> Self {
        col(&s)
    }
}

/// Колонка: col("users.id")
pub fn col(name: &str) -> SqlColumn {
    match name.rsplit_once('.') {
        Some((qualifier, column)) if !qualifier.is_empty() => {
            SqlColumn::qualified(qualifier, column)
        }
        _ => SqlColumn::new(name),
    }
}
