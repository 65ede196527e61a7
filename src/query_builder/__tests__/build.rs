use pretty_assertions::assert_eq;

use crate::criteria::{self, CriterionNode, ScopeCollector};
use crate::expression::col;
use crate::param::Param;
use crate::query_builder::{Error, QueryBuilder};
use crate::renderer::{Dialect, cfg_postgres};

const DUPLICATE: &str = "Setting more than one initial criterion is not allowed. \
                         Additional criteria should be added with \"and\" or \"or\" expression";

#[test]
fn model_keeps_declared_clauses() {
    let m = QueryBuilder::new_empty()
        .from("users")
        .r#where(col("a").is_equal_to(1))
        .build()
        .expect("ok");
    assert_eq!(m.from().map(|t| t.name()), Some("users"));
    assert!(m.where_clause().is_some());
    assert!(m.having().is_none());
    assert!(m.joins().is_empty());
}

#[test]
fn second_where_is_a_second_initial_criterion() {
    let err = QueryBuilder::new_empty()
        .from("users")
        .r#where(col("a").is_equal_to(1))
        .where_(col("b").is_equal_to(2))
        .build()
        .expect_err("must fail");
    assert!(matches!(
        err,
        Error::Criteria(criteria::Error::DuplicateInitialCriterion)
    ));
    assert_eq!(err.to_string(), DUPLICATE);
}

#[test]
fn and_where_without_where_is_allowed() {
    let (sql, _) = QueryBuilder::new_empty()
        .from("t")
        .and_where(col("a").is_equal_to(1))
        .or_where(col("b").is_equal_to(2))
        .to_sql()
        .expect("ok");
    assert_eq!(sql, r#"SELECT * FROM "t" WHERE "a" = $1 OR "b" = $2"#);
}

#[test]
fn several_errors_collapse_into_one() {
    let err = QueryBuilder::new_empty()
        .from("a b c d")
        .r#where(col("a").is_equal_to(1))
        .r#where(col("b").is_equal_to(2))
        .having_raw("))")
        .build()
        .expect_err("must fail");

    match err {
        Error::BuilderErrors(list) => {
            assert_eq!(list.0.len(), 3);
            assert!(list.0[1].starts_with("Setting more than one initial criterion"));
        }
        other => panic!("expected BuilderErrors, got {other:?}"),
    }
}

#[test]
fn where_group_and_not() {
    let (sql, params) = QueryBuilder::new_empty()
        .from("t")
        .where_group(|g: ScopeCollector| g.condition(col("a").is_equal_to(1)).or(col("b").is_equal_to(2)))
        .and_where(|c: ScopeCollector| c.not(col("c").is_null()))
        .to_sql()
        .expect("ok");
    assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE ("a" = $1 OR "b" = $2) AND NOT "c" IS NULL"#
    );
    assert_eq!(params, vec![Param::I32(1), Param::I32(2)]);
}

#[test]
fn where_node_kinds_survive_build() {
    let m = QueryBuilder::new_empty()
        .from("t")
        .where_exists(|q| q.from("u"))
        .build()
        .expect("ok");
    let initial = m.where_clause().and_then(|g| g.initial());
    assert!(matches!(initial, Some(CriterionNode::Exists(_))));
}

#[test]
fn dialect_drives_default_preset() {
    let qb = || {
        QueryBuilder::new_empty()
            .from("t")
            .r#where(col("a").is_equal_to(1))
    };
    let (pg, _) = qb().to_sql().expect("ok");
    let (my, _) = qb().with_dialect(Dialect::MySQL).to_sql().expect("ok");
    let (sq, _) = qb().with_dialect(Dialect::SQLite).to_sql().expect("ok");
    assert_eq!(pg, r#"SELECT * FROM "t" WHERE "a" = $1"#);
    assert_eq!(my, "SELECT * FROM `t` WHERE `a` = ?");
    assert_eq!(sq, r#"SELECT * FROM "t" WHERE "a" = ?"#);
}

#[test]
fn list_ingestion_from_builder() {
    use crate::criteria::list::{and_condition, or_condition};

    let (sql, _) = QueryBuilder::new_empty()
        .from("t")
        .r#where(col("a").is_less_than(5))
        .or_where_list(vec![
            or_condition(col("b").is_equal_to(3)),
            or_condition(col("b").is_equal_to(4)),
        ])
        .and_where_list(vec![and_condition(col("c").is_equal_to(1))])
        .to_sql_with(&cfg_postgres())
        .expect("ok");
    assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE "a" < $1 OR ("b" = $2 OR "b" = $3) AND "c" = $4"#
    );
}
