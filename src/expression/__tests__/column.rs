use crate::expression::{SqlColumn, col};

#[test]
fn col_without_dot_has_no_qualifier() {
    let c = col("age");
    assert_eq!(c.name(), "age");
    assert!(c.qualifier().is_none());
    assert_eq!(c.path().collect::<Vec<_>>(), vec!["age"]);
}

#[test]
fn col_splits_on_last_dot() {
    let c = col("public.users.id");
    assert_eq!(c.qualifier(), Some("public.users"));
    assert_eq!(c.name(), "id");
    // квалификатор раскладывается по точкам для квотирования
    assert_eq!(c.path().collect::<Vec<_>>(), vec!["public", "users", "id"]);
}

#[test]
fn with_qualifier_replaces_table() {
    let c = col("users.id").with_qualifier("u");
    assert_eq!(c, SqlColumn::qualified("u", "id"));
    assert_eq!(c.to_string(), "u.id");
}

#[test]
fn leading_dot_is_kept_in_name() {
    // пустой квалификатор не считается квалификатором
    let c = col(".weird");
    assert!(c.qualifier().is_none());
    assert_eq!(c.name(), ".weird");
}

#[test]
fn from_str_and_string_use_col() {
    let a: SqlColumn = "t.a".into();
    let b: SqlColumn = String::from("t.a").into();
    assert_eq!(a, b);
}
