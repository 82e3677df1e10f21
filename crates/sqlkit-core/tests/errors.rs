//! Invalid IR is reported instead of rendered.

mod common;
use common::*;

use sqlkit_core::data::{
    Column, Comparison, ComputedColumn, DataQuery, GroupBy, Join, JoinMethod, Predicate,
    PredicateGroup, PredicateGroupRelation, PredicateValue, StatementKind,
};
use sqlkit_core::error::IdentifierKind;
use sqlkit_core::{SerializeError, MAX_PLACEHOLDERS};

#[test]
fn zero_placeholders() {
    let query = DataQuery::select("foo").filter(Predicate::in_list("id", 0));
    assert_eq!(
        render_err(&query),
        SerializeError::EmptyPlaceholderList {
            column: String::from("id")
        }
    );
}

#[test]
fn zero_placeholders_inside_subquery() {
    let sub = DataQuery::select("bar")
        .column("foo_id")
        .filter(Predicate::in_list("kind", 0));
    let query = DataQuery::select("foo").filter(Predicate::new(
        "id",
        Comparison::In,
        PredicateValue::from(sub),
    ));
    assert!(matches!(
        render_err(&query),
        SerializeError::EmptyPlaceholderList { column } if column == "kind"
    ));
}

#[test]
fn zero_placeholders_allowed_for_null_checks() {
    let query = DataQuery::select("foo").filter(Predicate::new(
        "deleted_at",
        Comparison::IsNull,
        PredicateValue::Placeholders(0),
    ));
    assert_eq!(
        render(&query),
        "SELECT * FROM `foo` WHERE (`deleted_at` IS NULL)"
    );
}

#[test]
fn empty_nested_group() {
    let query = DataQuery::select("foo")
        .filter(eq("id"))
        .filter(PredicateGroup::or(vec![]));
    assert_eq!(render_err(&query), SerializeError::EmptyPredicateGroup);
}

#[test]
fn empty_custom_relation() {
    let group = PredicateGroup::new(
        PredicateGroupRelation::Custom(String::new()),
        vec![eq("a").into(), eq("b").into()],
    );
    let query = DataQuery::select("foo").filter(group);
    assert_eq!(render_err(&query), SerializeError::EmptyRelation);
}

#[test]
fn empty_identifiers() {
    let cases = [
        (DataQuery::select(""), IdentifierKind::Table),
        (DataQuery::select("foo").column(""), IdentifierKind::Column),
        (
            DataQuery::select("foo").filter(eq(Column::qualified("", "id"))),
            IdentifierKind::Table,
        ),
        (
            DataQuery::select("foo").computed(ComputedColumn::new("")),
            IdentifierKind::Function,
        ),
        (
            DataQuery::select("foo").computed(ComputedColumn::count_all().alias("")),
            IdentifierKind::Alias,
        ),
    ];
    for (query, kind) in cases {
        assert_eq!(
            render_err(&query),
            SerializeError::EmptyIdentifier { kind },
            "{query:?}"
        );
    }
}

#[test]
fn between_with_placeholder_list() {
    let query = DataQuery::select("foo").filter(Predicate::new(
        "age",
        Comparison::Between,
        PredicateValue::Placeholders(3),
    ));
    assert_eq!(
        render_err(&query),
        SerializeError::BetweenArity {
            column: String::from("age"),
            count: 3
        }
    );
}

#[test]
fn join_without_foreign_table() {
    let query = DataQuery::select("foo").join(Join::inner(
        Column::qualified("foo", "id"),
        Column::new("foo_id"),
    ));
    assert_eq!(
        render_err(&query),
        SerializeError::UnqualifiedJoinColumn {
            column: String::from("foo_id")
        }
    );
}

#[test]
fn write_statements_reject_select_clauses() {
    let query = DataQuery::insert("foo").column("a").distinct();
    assert_eq!(
        render_err(&query),
        SerializeError::UnsupportedClause {
            statement: StatementKind::Insert,
            clause: "DISTINCT"
        }
    );

    let query = DataQuery::update("foo")
        .column("a")
        .join(Join::inner(
            Column::qualified("foo", "id"),
            Column::qualified("bar", "foo_id"),
        ));
    assert_eq!(
        render_err(&query),
        SerializeError::UnsupportedClause {
            statement: StatementKind::Update,
            clause: "JOIN"
        }
    );

    let query = DataQuery::delete("foo").group_by(Column::new("a"));
    assert_eq!(
        render_err(&query),
        SerializeError::UnsupportedClause {
            statement: StatementKind::Delete,
            clause: "GROUP BY"
        }
    );
}

#[test]
fn error_messages_name_the_problem() {
    let err = render_err(&DataQuery::insert("foo"));
    assert_eq!(err.to_string(), "INSERT INTO requires at least one column");
}

#[test]
fn empty_custom_group_by() {
    for text in ["", "  "] {
        let query = DataQuery::select("foo").group_by(GroupBy::Custom(String::from(text)));
        assert_eq!(
            render_err(&query),
            SerializeError::EmptyCustomSql { part: "GROUP BY" }
        );
    }
}

#[test]
fn empty_custom_join_method() {
    let query = DataQuery::select("foo").join(Join::new(
        JoinMethod::Custom(String::new()),
        Column::qualified("foo", "id"),
        Column::qualified("bar", "foo_id"),
    ));
    assert_eq!(
        render_err(&query),
        SerializeError::EmptyCustomSql {
            part: "JOIN method"
        }
    );
}

#[test]
fn subquery_must_select() {
    let writes = [
        DataQuery::insert("bar").column("x"),
        DataQuery::update("bar").column("x"),
        DataQuery::delete("bar"),
    ];
    for sub in writes {
        let statement = sub.statement;
        let query = DataQuery::select("foo").filter(Predicate::new(
            "id",
            Comparison::In,
            PredicateValue::from(sub),
        ));
        assert_eq!(
            render_err(&query),
            SerializeError::NonSelectSubquery { statement }
        );
    }
}

#[test]
fn placeholder_list_limit() {
    let query = DataQuery::select("foo").filter(Predicate::in_list("id", MAX_PLACEHOLDERS));
    assert_eq!(render(&query).matches('?').count(), MAX_PLACEHOLDERS);

    for count in [MAX_PLACEHOLDERS + 1, usize::MAX] {
        let query = DataQuery::select("foo").filter(Predicate::in_list("id", count));
        assert_eq!(
            render_err(&query),
            SerializeError::TooManyPlaceholders {
                column: String::from("id"),
                count
            }
        );
    }
}
