use core::fmt;
use std::borrow::Cow;

use crate::{criteria, renderer};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Невалидный аргумент/выражение для данного контекста
    #[error("Invalid expression: {reason}")]
    InvalidExpression { reason: Cow<'static, str> },

    /// Нарушен инвариант дерева критериев (дубль начального критерия, JOIN без ON, ...)
    #[error(transparent)]
    Criteria(#[from] criteria::Error),

    #[error(transparent)]
    SQLRenderError(#[from] renderer::Error),

    #[error("Builder errors:\n{0}")]
    BuilderErrors(BuilderErrorList),
}

#[derive(Debug, Default)]
pub struct BuilderErrorList(pub Vec<String>);

impl From<Vec<String>> for BuilderErrorList {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl fmt::Display for BuilderErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no details");
        }
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {line}")?;
        }
        Ok(())
    }
}
