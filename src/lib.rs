//! Knex-style builder for SQL predicate trees.
//!
//! ```
//! use knux_criteria::{QueryBuilder, ScopeCollector, col};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (sql, params) = QueryBuilder::new_empty()
//!     .from("users")
//!     .r#where(col("age").is_less_than(5))
//!     .and_where(|c: ScopeCollector| {
//!         c.condition(col("b").is_equal_to(3))
//!             .or(col("c").is_equal_to(4))
//!     })
//!     .to_sql()?;
//!
//! assert_eq!(
//!     sql,
//!     r#"SELECT * FROM "users" WHERE "age" < $1 AND ("b" = $2 OR "c" = $3)"#
//! );
//! assert_eq!(params.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod criteria;
pub mod expression;
pub mod param;
pub mod query_builder;
pub mod renderer;
mod utils;

pub use criteria::{ConnectedAggregate, Connector, CriteriaGroup, CriterionNode, ScopeCollector};
pub use expression::{SqlColumn, col};
pub use param::Param;
pub use query_builder::{JoinOnCollector, QueryBuilder, SelectModel};
