use crate::expression::{SqlColumn, col};
use crate::query_builder::ColumnList;

fn names(cols: Vec<SqlColumn>) -> Vec<String> {
    cols.iter().map(ToString::to_string).collect()
}

#[test]
fn single_and_collections() {
    assert_eq!(names("id".into_columns()), vec!["id"]);
    assert_eq!(names(String::from("u.id").into_columns()), vec!["u.id"]);
    assert_eq!(names(col("x").into_columns()), vec!["x"]);
    assert_eq!(names(["a", "b"].into_columns()), vec!["a", "b"]);
    assert_eq!(names(vec!["a", "b", "c"].into_columns()), vec!["a", "b", "c"]);
    assert!(().into_columns().is_empty());
}

#[test]
fn mixed_tuple() {
    let cols = ("a", String::from("t.b"), col("c")).into_columns();
    assert_eq!(names(cols.clone()), vec!["a", "t.b", "c"]);
    assert_eq!(cols[1].qualifier(), Some("t"));
}
