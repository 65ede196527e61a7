use crate::criteria::list::{and_condition, and_group, or_condition, or_group, splice};
use crate::criteria::{Connector, CriterionNode, Error, ScopeCollector};
use crate::expression::col;

#[test]
fn or_list_after_initial_never_duplicates() {
    let g = ScopeCollector::new()
        .condition(col("a").is_less_than(5))
        .or_list(vec![
            or_condition(col("b").is_equal_to(3)),
            or_condition(col("b").is_equal_to(4)),
            or_condition(col("b").is_equal_to(5)),
        ])
        .finish()
        .expect("list path must not hit the initial-criterion check");

    assert!(g.initial().is_some());
    let subs = g.sub_criteria();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].connector(), Connector::Or);
    // обёртка списка: без начального критерия, элементы как есть
    assert!(subs[0].initial().is_none());
    assert_eq!(subs[0].sub_criteria().len(), 3);
}

#[test]
fn empty_list_is_accepted() {
    let g = ScopeCollector::new()
        .condition(col("a").is_equal_to(1))
        .and_list(Vec::new())
        .or_list(Vec::new())
        .finish()
        .expect("ok");
    assert_eq!(g.sub_criteria().len(), 2);
    assert!(g.sub_criteria().iter().all(|s| s.is_empty()));
}

#[test]
fn repeated_lists_only_append() {
    let mut c = ScopeCollector::new().condition(col("a").is_equal_to(1));
    for i in 0..5 {
        splice(&mut c, Connector::And, vec![and_condition(col("x").is_equal_to(i))]);
    }
    let g = c.finish().expect("ok");
    assert_eq!(g.sub_criteria().len(), 5);
}

#[test]
fn list_elements_keep_their_own_connectors() {
    let g = ScopeCollector::new()
        .and_list(vec![
            and_condition(col("a").is_equal_to(1)),
            or_condition(col("b").is_equal_to(2)),
        ])
        .finish()
        .expect("ok");
    let inner = g.sub_criteria()[0].sub_criteria();
    assert_eq!(inner[0].connector(), Connector::And);
    assert_eq!(inner[1].connector(), Connector::Or);
    assert!(matches!(
        inner[1].initial(),
        Some(CriterionNode::Condition(_))
    ));
}

#[test]
fn group_helpers_build_connected_aggregates() {
    let a = and_group(|c: ScopeCollector| c.condition(col("a").is_equal_to(1)).or(col("b").is_null()))
        .expect("ok");
    assert_eq!(a.connector(), Connector::And);
    assert!(a.initial().is_some());
    assert_eq!(a.sub_criteria().len(), 1);

    let o = or_group(col("c").is_equal_to(2)).expect("ok");
    assert_eq!(o.connector(), Connector::Or);
}

#[test]
fn group_helpers_still_check_their_own_scope() {
    let res = and_group(|c: ScopeCollector| {
        c.condition(col("a").is_equal_to(1))
            .condition(col("b").is_equal_to(2))
    });
    assert!(matches!(res, Err(Error::DuplicateInitialCriterion)));
}

#[test]
fn list_on_poisoned_scope_is_ignored() {
    let c = ScopeCollector::new()
        .condition(col("a").is_equal_to(1))
        .condition(col("b").is_equal_to(2))
        .and_list(vec![and_condition(col("c").is_equal_to(3))]);
    assert!(matches!(c.finish(), Err(Error::DuplicateInitialCriterion)));
}
