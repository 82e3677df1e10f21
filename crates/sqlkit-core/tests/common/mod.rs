#![allow(dead_code)]

use sqlkit_core::data::{Column, Comparison, DataQuery, Predicate};
use sqlkit_core::{Dialect, SerializeError, SerializedQuery, Serializer};

pub fn render(query: &DataQuery) -> String {
    render_with(sqlkit_core::GeneralDialect::new(), query).sql
}

pub fn render_with<D: Dialect>(dialect: D, query: &DataQuery) -> SerializedQuery {
    Serializer::new(dialect)
        .serialize(query)
        .unwrap_or_else(|e| panic!("Failed to serialize: {query:?}\nError: {e}"))
}

pub fn render_err(query: &DataQuery) -> SerializeError {
    Serializer::general()
        .serialize(query)
        .expect_err(&format!("Expected serialize error for: {query:?}"))
}

/// Bind names in emission order.
pub fn bind_names(rendered: &SerializedQuery) -> Vec<&str> {
    rendered.binds.iter().map(|b| b.name.as_str()).collect()
}

/// Number of `?` tokens in `sql`.
pub fn count_markers(sql: &str) -> usize {
    sql.matches('?').count()
}

pub fn eq(column: impl Into<Column>) -> Predicate {
    Predicate::placeholder(column, Comparison::Equal)
}
