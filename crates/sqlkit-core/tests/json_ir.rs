//! IR decoded from JSON renders like IR built in code.

mod common;
use common::*;

use sqlkit_core::data::{Column, Comparison, DataQuery, GroupBy, Join, Predicate, PredicateGroup};

fn decode(json: &str) -> DataQuery {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("Invalid IR: {e}\n{json}"))
}

#[test]
fn minimal_select() {
    let query = decode(r#"{"statement": "select", "table": "foo"}"#);
    assert_eq!(query, DataQuery::select("foo"));
    assert_eq!(render(&query), "SELECT * FROM `foo`");
}

#[test]
fn fixture_matches_builder() {
    let query = decode(include_str!("fixtures/report.json"));

    let built = DataQuery::select("foo")
        .join(Join::inner(
            Column::qualified("foo", "id"),
            Column::qualified("bar", "foo_id"),
        ))
        .filter(Predicate::placeholder("id", Comparison::Equal))
        .filter(PredicateGroup::or(vec![
            Predicate::is_null(Column::qualified("bar", "archived_at")).into(),
            Predicate::in_list(Column::qualified("bar", "state"), 2).into(),
        ]))
        .group_by(GroupBy::Custom(String::from("YEAR(`foo`.`date`)")))
        .group_by(Column::qualified("foo", "name"))
        .limit(50);

    assert_eq!(query, built);
    assert_eq!(
        render(&query),
        "SELECT `foo`.* FROM `foo` JOIN `bar` ON `foo`.`id` = `bar`.`foo_id` \
         WHERE (`id` = ? AND (`bar`.`archived_at` IS NULL OR `bar`.`state` IN (?, ?))) \
         GROUP BY YEAR(`foo`.`date`), `foo`.`name` LIMIT 50"
    );
}

#[test]
fn encoding_round_trips() {
    let query = DataQuery::update("users")
        .column("email")
        .filter(Predicate::placeholder("id", Comparison::Equal));
    let json = serde_json::to_string(&query).unwrap();
    assert_eq!(decode(&json), query);
}
