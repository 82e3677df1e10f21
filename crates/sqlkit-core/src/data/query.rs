//! Whole statements and their clause types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::column::{Column, ComputedColumn};
use super::predicate::PredicateItem;

/// Kind of statement a [`DataQuery`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// `SELECT ... FROM`
    #[default]
    Select,
    /// `INSERT INTO`
    Insert,
    /// `UPDATE`
    Update,
    /// `DELETE FROM`
    Delete,
}

impl StatementKind {
    /// Returns the leading SQL keyword(s).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT INTO",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE FROM",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMethod {
    /// `JOIN` (inner).
    Inner,
    /// `LEFT JOIN`
    Left,
    /// `RIGHT JOIN`
    Right,
    /// `FULL OUTER JOIN`
    Outer,
    /// Raw method keyword, emitted verbatim before `JOIN`.
    Custom(String),
}

impl JoinMethod {
    /// Returns the SQL keyword(s) introducing the join.
    #[must_use]
    pub fn keyword(&self) -> String {
        match self {
            Self::Inner => String::from("JOIN"),
            Self::Left => String::from("LEFT JOIN"),
            Self::Right => String::from("RIGHT JOIN"),
            Self::Outer => String::from("FULL OUTER JOIN"),
            Self::Custom(method) => format!("{method} JOIN"),
        }
    }
}

/// `<method> JOIN <foreign table> ON <local> = <foreign>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    /// Join method.
    pub method: JoinMethod,
    /// Column on the driving side.
    pub local: Column,
    /// Column on the joined table. Its table is the one being joined.
    pub foreign: Column,
}

impl Join {
    /// Creates a join.
    #[must_use]
    pub const fn new(method: JoinMethod, local: Column, foreign: Column) -> Self {
        Self {
            method,
            local,
            foreign,
        }
    }

    /// Creates an inner join.
    #[must_use]
    pub const fn inner(local: Column, foreign: Column) -> Self {
        Self::new(JoinMethod::Inner, local, foreign)
    }
}

/// A `GROUP BY` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// A column reference.
    Column(Column),
    /// Raw SQL, emitted verbatim.
    Custom(String),
}

impl From<Column> for GroupBy {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

/// Sort direction of an [`OrderBy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    /// `ASC`
    #[default]
    Ascending,
    /// `DESC`
    Descending,
    /// Raw direction text, emitted verbatim (`DESC NULLS LAST`).
    Custom(String),
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
            Self::Custom(direction) => direction,
        }
    }
}

/// An `ORDER BY` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Column to sort by.
    pub column: Column,
    /// Sort direction.
    #[serde(default)]
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Ascending order on `column`.
    #[must_use]
    pub const fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: OrderDirection::Ascending,
        }
    }

    /// Descending order on `column`.
    #[must_use]
    pub const fn descending(column: Column) -> Self {
        Self {
            column,
            direction: OrderDirection::Descending,
        }
    }
}

/// A complete statement.
///
/// For `SELECT`, `columns` and `computed` form the projection; both empty
/// means every column. For `INSERT` and `UPDATE`, `columns` lists the
/// written columns, each paired with one bind placeholder.
///
/// `predicates` is an implicit `AND` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuery {
    /// Statement kind.
    pub statement: StatementKind,
    /// Driving table.
    pub table: String,
    /// `SELECT DISTINCT`.
    #[serde(default)]
    pub distinct: bool,
    /// Projected or written columns.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Projected function columns.
    #[serde(default)]
    pub computed: Vec<ComputedColumn>,
    /// Joins, in order.
    #[serde(default)]
    pub joins: Vec<Join>,
    /// Top-level predicates, combined with `AND`.
    #[serde(default)]
    pub predicates: Vec<PredicateItem>,
    /// `GROUP BY` entries.
    #[serde(default)]
    pub group_bys: Vec<GroupBy>,
    /// `ORDER BY` entries.
    #[serde(default)]
    pub order_bys: Vec<OrderBy>,
    /// `LIMIT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// `OFFSET`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl DataQuery {
    /// Creates an empty statement of the given kind.
    #[must_use]
    pub fn new(statement: StatementKind, table: impl Into<String>) -> Self {
        Self {
            statement,
            table: table.into(),
            distinct: false,
            columns: vec![],
            computed: vec![],
            joins: vec![],
            predicates: vec![],
            group_bys: vec![],
            order_bys: vec![],
            limit: None,
            offset: None,
        }
    }

    /// `SELECT * FROM <table>`.
    #[must_use]
    pub fn select(table: impl Into<String>) -> Self {
        Self::new(StatementKind::Select, table)
    }

    /// `INSERT INTO <table>`.
    #[must_use]
    pub fn insert(table: impl Into<String>) -> Self {
        Self::new(StatementKind::Insert, table)
    }

    /// `UPDATE <table>`.
    #[must_use]
    pub fn update(table: impl Into<String>) -> Self {
        Self::new(StatementKind::Update, table)
    }

    /// `DELETE FROM <table>`.
    #[must_use]
    pub fn delete(table: impl Into<String>) -> Self {
        Self::new(StatementKind::Delete, table)
    }

    /// Sets `DISTINCT`.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Appends a function column.
    #[must_use]
    pub fn computed(mut self, computed: ComputedColumn) -> Self {
        self.computed.push(computed);
        self
    }

    /// Appends a join.
    #[must_use]
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Appends a top-level predicate or group.
    #[must_use]
    pub fn filter(mut self, item: impl Into<PredicateItem>) -> Self {
        self.predicates.push(item.into());
        self
    }

    /// Appends a `GROUP BY` entry.
    #[must_use]
    pub fn group_by(mut self, group_by: impl Into<GroupBy>) -> Self {
        self.group_bys.push(group_by.into());
        self
    }

    /// Appends an `ORDER BY` entry.
    #[must_use]
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_bys.push(order_by);
        self
    }

    /// Sets `LIMIT`.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets `OFFSET`.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Predicate;

    #[test]
    fn test_statement_keywords() {
        assert_eq!(StatementKind::Select.as_str(), "SELECT");
        assert_eq!(StatementKind::Insert.as_str(), "INSERT INTO");
        assert_eq!(StatementKind::Update.to_string(), "UPDATE");
        assert_eq!(StatementKind::Delete.to_string(), "DELETE FROM");
    }

    #[test]
    fn test_join_keywords() {
        assert_eq!(JoinMethod::Inner.keyword(), "JOIN");
        assert_eq!(JoinMethod::Left.keyword(), "LEFT JOIN");
        assert_eq!(JoinMethod::Right.keyword(), "RIGHT JOIN");
        assert_eq!(JoinMethod::Outer.keyword(), "FULL OUTER JOIN");
        assert_eq!(
            JoinMethod::Custom(String::from("NATURAL")).keyword(),
            "NATURAL JOIN"
        );
    }

    #[test]
    fn test_query_builder() {
        let query = DataQuery::select("users")
            .distinct()
            .column("id")
            .filter(Predicate::is_null("deleted_at"))
            .group_by(Column::new("id"))
            .order_by(OrderBy::descending(Column::new("id")))
            .limit(10)
            .offset(5);

        assert_eq!(query.statement, StatementKind::Select);
        assert!(query.distinct);
        assert_eq!(query.columns, vec![Column::new("id")]);
        assert_eq!(query.predicates.len(), 1);
        assert_eq!(query.group_bys.len(), 1);
        assert_eq!(query.order_bys[0].direction, OrderDirection::Descending);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(5));
    }
}
