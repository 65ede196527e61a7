use crate::criteria::{ConnectedAggregate, Connector, CriteriaGroup, CriterionNode};
use crate::expression::col;

#[test]
fn connector_sql_tokens() {
    assert_eq!(Connector::And.as_sql(), "AND");
    assert_eq!(Connector::Or.as_sql(), "OR");
}

#[test]
fn connect_moves_group_under_connector() {
    let g = CriteriaGroup::new(
        Some(col("a").is_equal_to(1).into()),
        vec![ConnectedAggregate::new(
            Connector::Or,
            Some(col("b").is_equal_to(2).into()),
            Vec::new(),
        )],
    );
    let agg = g.clone().connect(Connector::And);
    assert_eq!(agg.connector(), Connector::And);
    assert_eq!(agg.initial(), g.initial());
    assert_eq!(agg.sub_criteria(), g.sub_criteria());
}

#[test]
fn emptiness() {
    assert!(CriteriaGroup::default().is_empty());
    assert!(ConnectedAggregate::new(Connector::And, None, Vec::new()).is_empty());

    let only_children = ConnectedAggregate::new(
        Connector::And,
        None,
        vec![ConnectedAggregate::new(Connector::Or, None, Vec::new())],
    );
    assert!(!only_children.is_empty());
}

#[test]
fn condition_converts_into_node() {
    let node: CriterionNode = col("x").is_not_null().into();
    match node {
        CriterionNode::Condition(c) => assert_eq!(c.column().name(), "x"),
        other => panic!("expected Condition, got {other:?}"),
    }
}
