use crate::expression::{CmpOp, Condition, col};
use crate::param::Param;

#[test]
fn comparisons_bind_value_with_operator() {
    let c = col("age").is_greater_than_or_equal_to(18);
    assert_eq!(c.column().name(), "age");
    match c.condition() {
        Condition::Compare { op, value } => {
            assert_eq!(*op, CmpOp::GtEq);
            assert_eq!(*value, Param::I32(18));
        }
        other => panic!("expected Compare, got {other:?}"),
    }
}

#[test]
fn operator_sql_tokens() {
    let ops = [
        (CmpOp::Eq, "="),
        (CmpOp::NotEq, "<>"),
        (CmpOp::Gt, ">"),
        (CmpOp::GtEq, ">="),
        (CmpOp::Lt, "<"),
        (CmpOp::LtEq, "<="),
    ];
    for (op, sql) in ops {
        assert_eq!(op.as_sql(), sql);
    }
}

#[test]
fn column_comparison_keeps_other_column() {
    let c = col("u.id").is_equal_to_column(col("a.user_id"));
    match c.condition() {
        Condition::CompareColumn { op, column } => {
            assert_eq!(*op, CmpOp::Eq);
            assert_eq!(column.qualifier(), Some("a"));
            assert_eq!(column.name(), "user_id");
        }
        other => panic!("expected CompareColumn, got {other:?}"),
    }
}

#[test]
fn when_present_none_is_not_renderable() {
    assert!(!col("a").is_equal_to_when_present(None::<i32>).is_renderable());
    assert!(!col("a").is_like_when_present(None::<&str>).is_renderable());
    assert!(col("a").is_equal_to_when_present(Some(1)).is_renderable());
}

#[test]
fn in_when_present_drops_none_values() {
    let c = col("id").is_in_when_present([Some(1), None, Some(3)]);
    match c.condition() {
        Condition::In {
            values,
            negated,
            when_present,
        } => {
            assert_eq!(values, &vec![Param::I32(1), Param::I32(3)]);
            assert!(!negated);
            assert!(when_present);
        }
        other => panic!("expected In, got {other:?}"),
    }

    let empty = col("id").is_in_when_present([None::<i64>, None]);
    assert!(!empty.is_renderable());
}

#[test]
fn plain_empty_in_is_still_renderable() {
    // ошибку даст рендерер, а не конструктор
    let c = col("id").is_in(Vec::<i32>::new());
    assert!(c.is_renderable());
}

#[test]
fn between_and_like_flags() {
    let b = col("x").is_not_between(1, 10);
    assert!(matches!(
        b.condition(),
        Condition::Between { negated: true, .. }
    ));

    let l = col("name").is_like("%ab%");
    match l.condition() {
        Condition::Like { pattern, negated } => {
            assert_eq!(*pattern, Param::Str("%ab%".into()));
            assert!(!negated);
        }
        other => panic!("expected Like, got {other:?}"),
    }
}

#[test]
fn null_checks() {
    assert!(matches!(
        col("d").is_null().condition(),
        Condition::Null { negated: false }
    ));
    assert!(matches!(
        col("d").is_not_null().condition(),
        Condition::Null { negated: true }
    ));
}
