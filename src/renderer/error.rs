use std::borrow::Cow;

use crate::renderer::Dialect;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Feature: {feature} is not supported by dialect: {dialect}")]
    UnsupportedFeature {
        feature: Cow<'static, str>,
        dialect: Dialect,
    },

    /// `IN ()` невалиден; для «пропусти, если пусто» есть `is_in_when_present`
    #[error("IN condition on column {column} has an empty value list")]
    EmptyInList { column: String },

    #[error("WHERE clause was declared but renders nothing")]
    NonRenderingWhereClause,

    #[error("JOIN {table} has no renderable ON condition")]
    NonRenderingJoinCondition { table: String },
}
