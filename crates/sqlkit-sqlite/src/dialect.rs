//! SQLite dialect implementation.

use sqlkit_core::dialect::{Dialect, PlaceholderStyle};
use sqlkit_core::Bind;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered
    }

    fn placeholder(&self, bind: &Bind) -> String {
        format!("?{}", bind.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlkit_core::data::{Column, Comparison, DataQuery, Join, Predicate};
    use sqlkit_core::Serializer;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.placeholder_style(), PlaceholderStyle::Numbered);
        assert_eq!(dialect.placeholder(&Bind::new("age.min", 7)), "?7");
    }

    #[test]
    fn test_sqlite_join_and_between() {
        let query = DataQuery::select("foo")
            .join(Join::inner(
                Column::qualified("foo", "id"),
                Column::qualified("bar", "foo_id"),
            ))
            .filter(Predicate::between(Column::qualified("bar", "score")))
            .filter(Predicate::placeholder("name", Comparison::Like));
        let rendered = Serializer::new(SqliteDialect::new())
            .serialize(&query)
            .unwrap();
        assert_eq!(
            rendered.sql,
            r#"SELECT "foo".* FROM "foo" JOIN "bar" ON "foo"."id" = "bar"."foo_id" WHERE ("bar"."score" BETWEEN ?1 AND ?2 AND "name" LIKE ?3)"#
        );
    }
}
