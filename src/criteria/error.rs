use std::borrow::Cow;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Второй начальный критерий в одном scope
    #[error(
        "Setting more than one initial criterion is not allowed. Additional criteria should be added with \"and\" or \"or\" expression"
    )]
    DuplicateInitialCriterion,

    /// Второй `on(...)` внутри одного JOIN
    #[error(
        "Setting more than one ON condition is not allowed. Additional join criteria should be added with \"and\" or \"or\" expression"
    )]
    DuplicateOnCondition,

    #[error("JOIN requires an ON condition")]
    MissingOnCondition,

    /// Невалидный сырой фрагмент / неподходящий критерий для контекста
    #[error("Invalid expression: {reason}")]
    InvalidExpression { reason: Cow<'static, str> },

    /// Подзапрос (EXISTS) не собрался
    #[error("Subquery error: {0}")]
    Subquery(Box<crate::query_builder::Error>),
}
