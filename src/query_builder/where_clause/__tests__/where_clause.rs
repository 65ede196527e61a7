use pretty_assertions::assert_eq;
use sqlparser::ast::{BinaryOperator as BO, Expr as SqlExpr};

use crate::criteria::{self, CriterionNode, ScopeCollector};
use crate::expression::col;
use crate::param::Param;
use crate::query_builder::{Error, QueryBuilder};

fn sql(qb: QueryBuilder) -> (String, Vec<Param>) {
    qb.to_sql().expect("render ok")
}

#[test]
fn where_with_nested_or_scope() {
    let (s, params) = sql(QueryBuilder::new_empty()
        .from("t")
        .r#where(col("A").is_less_than(5))
        .or_where(|c: ScopeCollector| {
            c.condition(col("B").is_equal_to(3))
                .or(col("B").is_equal_to(4))
                .or(col("B").is_equal_to(5))
        }));
    assert_eq!(
        s,
        r#"SELECT * FROM "t" WHERE "A" < $1 OR ("B" = $2 OR "B" = $3 OR "B" = $4)"#
    );
    assert_eq!(
        params,
        vec![Param::I32(5), Param::I32(3), Param::I32(4), Param::I32(5)]
    );
}

#[test]
fn where_closure_sets_several_parts_at_once() {
    let (s, _) = sql(QueryBuilder::new_empty().from("t").r#where(|w: ScopeCollector| {
        w.condition(col("a").is_equal_to(1))
            .and(col("b").is_equal_to(2))
    }));
    assert_eq!(s, r#"SELECT * FROM "t" WHERE "a" = $1 AND "b" = $2"#);
}

#[test]
fn where_raw_is_parsed_and_reprinted() {
    let m = QueryBuilder::new_empty()
        .from("t")
        .where_raw("a + 1 = b")
        .build()
        .expect("ok");
    match m.where_clause().and_then(|g| g.initial()) {
        Some(CriterionNode::Raw(raw)) => match raw.expr() {
            SqlExpr::BinaryOp { op, .. } => assert!(matches!(op, BO::Eq)),
            other => panic!("expected Eq, got {other:?}"),
        },
        other => panic!("expected raw node, got {other:?}"),
    }
}

#[test]
fn where_raw_rejects_garbage_and_empty() {
    for bad in [
        "",
        "   ",
        "a = = 1",
        "1; DROP TABLE t",
        "a = 1 ORDER BY b LIMIT 3",
        "a = 1 LIMIT 3",
        "a = 1 GROUP BY b",
        "a = 1 GROUP BY b HAVING COUNT(*) > 1",
        "a = 1 UNION SELECT 2",
    ] {
        let err = QueryBuilder::new_empty()
            .from("t")
            .where_raw(bad)
            .build()
            .expect_err(bad);
        assert!(
            matches!(err, Error::Criteria(criteria::Error::InvalidExpression { .. })),
            "{bad:?}: {err:?}"
        );
    }
}

#[test]
fn where_not_and_not_exists() {
    let (s, _) = sql(QueryBuilder::new_empty()
        .from("t")
        .where_not(|n: ScopeCollector| n.condition(col("a").is_equal_to(1)).or(col("b").is_equal_to(2)))
        .and_where(|c: ScopeCollector| c.not_exists(|q| q.from("u"))));
    assert_eq!(
        s,
        r#"SELECT * FROM "t" WHERE NOT ("a" = $1 OR "b" = $2) AND NOT EXISTS (SELECT * FROM "u")"#
    );
}

#[test]
fn where_exists_after_where_is_duplicate() {
    let err = QueryBuilder::new_empty()
        .from("t")
        .r#where(col("a").is_equal_to(1))
        .where_exists(|q| q.from("u"))
        .build()
        .expect_err("must fail");
    assert!(matches!(
        err,
        Error::Criteria(criteria::Error::DuplicateInitialCriterion)
    ));
}

#[test]
fn subquery_errors_are_wrapped() {
    let err = QueryBuilder::new_empty()
        .from("t")
        .where_exists(|q| q.from("u").where_raw(""))
        .build()
        .expect_err("must fail");
    assert!(matches!(
        err,
        Error::Criteria(criteria::Error::Subquery(_))
    ));
}

#[test]
fn compound_raw_keeps_its_own_grouping() {
    let (s, _) = sql(QueryBuilder::new_empty()
        .from("t")
        .r#where(col("x").is_equal_to(1))
        .and_where(|c: ScopeCollector| c.raw("a = 1 OR b = 2")));
    assert_eq!(s, r#"SELECT * FROM "t" WHERE "x" = $1 AND (a = 1 OR b = 2)"#);

    let (s, _) = sql(QueryBuilder::new_empty()
        .from("t")
        .where_not(|c: ScopeCollector| c.raw("a = 1 OR b = 2")));
    assert_eq!(s, r#"SELECT * FROM "t" WHERE NOT (a = 1 OR b = 2)"#);
}
