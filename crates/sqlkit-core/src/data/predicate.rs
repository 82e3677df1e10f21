//! Predicates and predicate trees.

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::query::DataQuery;

/// Comparison operator of a [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanOrEqual,
    /// `>=`
    GreaterThanOrEqual,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `BETWEEN`, which takes two binds per placeholder.
    Between,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IS NULL`
    IsNull,
    /// `IS NOT NULL`
    IsNotNull,
    /// No operator at all.
    None,
    /// Raw operator text, emitted verbatim.
    Sql(String),
}

impl Comparison {
    /// Returns the standard SQL spelling of the operator.
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::None => "",
            Self::Sql(sql) => sql,
        }
    }

    /// Returns `true` for comparisons whose right-hand value is never
    /// rendered, whatever [`PredicateValue`] accompanies them.
    #[must_use]
    pub const fn discards_value(&self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

/// Right-hand side of a [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateValue {
    /// `n` bind placeholders. One renders bare, more render as a
    /// parenthesized list.
    Placeholders(usize),
    /// Another column.
    Column(Column),
    /// A nested statement, rendered in parentheses.
    Subquery(Box<DataQuery>),
    /// Raw SQL, emitted verbatim.
    Custom(String),
    /// Nothing.
    None,
}

impl PredicateValue {
    /// A single bind placeholder.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::Placeholders(1)
    }
}

impl From<Column> for PredicateValue {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<DataQuery> for PredicateValue {
    fn from(query: DataQuery) -> Self {
        Self::Subquery(Box::new(query))
    }
}

/// A single boolean test: `<column> <comparison> <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Left-hand column.
    pub column: Column,
    /// Operator.
    pub comparison: Comparison,
    /// Right-hand side.
    pub value: PredicateValue,
}

impl Predicate {
    /// Creates a predicate.
    #[must_use]
    pub fn new(column: impl Into<Column>, comparison: Comparison, value: PredicateValue) -> Self {
        Self {
            column: column.into(),
            comparison,
            value,
        }
    }

    /// Compares the column against a single bind placeholder.
    #[must_use]
    pub fn placeholder(column: impl Into<Column>, comparison: Comparison) -> Self {
        Self::new(column, comparison, PredicateValue::placeholder())
    }

    /// `<column> IN (?, ?, ...)` with `count` placeholders.
    #[must_use]
    pub fn in_list(column: impl Into<Column>, count: usize) -> Self {
        Self::new(column, Comparison::In, PredicateValue::Placeholders(count))
    }

    /// `<column> BETWEEN ? AND ?`.
    #[must_use]
    pub fn between(column: impl Into<Column>) -> Self {
        Self::placeholder(column, Comparison::Between)
    }

    /// `<column> IS NULL`.
    #[must_use]
    pub fn is_null(column: impl Into<Column>) -> Self {
        Self::new(column, Comparison::IsNull, PredicateValue::None)
    }

    /// `<column> IS NOT NULL`.
    #[must_use]
    pub fn is_not_null(column: impl Into<Column>) -> Self {
        Self::new(column, Comparison::IsNotNull, PredicateValue::None)
    }
}

/// How the members of a [`PredicateGroup`] combine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateGroupRelation {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// Raw relation keyword, emitted verbatim.
    Custom(String),
}

impl PredicateGroupRelation {
    /// Returns the SQL keyword.
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Custom(keyword) => keyword,
        }
    }
}

/// A parenthesized group of predicates joined by one relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateGroup {
    /// Relation joining the members.
    pub relation: PredicateGroupRelation,
    /// Members, in order.
    pub predicates: Vec<PredicateItem>,
}

impl PredicateGroup {
    /// Creates a group.
    #[must_use]
    pub const fn new(relation: PredicateGroupRelation, predicates: Vec<PredicateItem>) -> Self {
        Self {
            relation,
            predicates,
        }
    }

    /// Members joined by `AND`.
    #[must_use]
    pub const fn and(predicates: Vec<PredicateItem>) -> Self {
        Self::new(PredicateGroupRelation::And, predicates)
    }

    /// Members joined by `OR`.
    #[must_use]
    pub const fn or(predicates: Vec<PredicateItem>) -> Self {
        Self::new(PredicateGroupRelation::Or, predicates)
    }
}

/// A node of the predicate tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateItem {
    /// A single predicate.
    Predicate(Predicate),
    /// A nested group.
    Group(PredicateGroup),
}

impl From<Predicate> for PredicateItem {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

impl From<PredicateGroup> for PredicateItem {
    fn from(group: PredicateGroup) -> Self {
        Self::Group(group)
    }
}
