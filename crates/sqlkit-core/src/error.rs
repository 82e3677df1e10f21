//! Error types.

use std::fmt;

use thiserror::Error;

use crate::data::StatementKind;

/// Largest placeholder list a single predicate may ask for.
///
/// Matches SQLite's default bound-parameter limit, the lowest among the
/// shipped dialects.
pub const MAX_PLACEHOLDERS: usize = 32_766;

/// What kind of identifier was found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// A table name.
    Table,
    /// A column name.
    Column,
    /// A computed column alias.
    Alias,
    /// A computed column function name.
    Function,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Column => "column",
            Self::Alias => "alias",
            Self::Function => "function",
        })
    }
}

/// The IR handed to a serializer does not describe a valid statement.
///
/// Nothing is rendered for invalid IR; the caller gets one of these
/// instead of degenerate SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// A table, column, alias or function name is empty.
    #[error("empty {kind} name")]
    EmptyIdentifier {
        /// Which identifier was empty.
        kind: IdentifierKind,
    },

    /// `Placeholders(0)` on a comparison that renders its value.
    #[error("predicate on '{column}' has an empty placeholder list")]
    EmptyPlaceholderList {
        /// The predicate's column name.
        column: String,
    },

    /// A predicate group has no members.
    #[error("predicate group has no members")]
    EmptyPredicateGroup,

    /// A custom group relation is empty.
    #[error("custom predicate group relation is empty")]
    EmptyRelation,

    /// `BETWEEN` with other than one placeholder pair.
    #[error("BETWEEN on '{column}' takes exactly one placeholder pair, got {count}")]
    BetweenArity {
        /// The predicate's column name.
        column: String,
        /// The placeholder count supplied.
        count: usize,
    },

    /// A join whose foreign column does not name the joined table.
    #[error("join on '{column}' has no foreign table")]
    UnqualifiedJoinColumn {
        /// The foreign column name.
        column: String,
    },

    /// `INSERT` or `UPDATE` without any column to write.
    #[error("{statement} requires at least one column")]
    EmptyColumnList {
        /// The statement kind.
        statement: StatementKind,
    },

    /// Raw SQL standing in for a clause part is empty.
    #[error("custom {part} is empty")]
    EmptyCustomSql {
        /// Which part was empty, e.g. `GROUP BY` or `JOIN method`.
        part: &'static str,
    },

    /// `Placeholders(n)` above [`MAX_PLACEHOLDERS`].
    #[error("predicate on '{column}' asks for {count} placeholders, at most {max} allowed", max = MAX_PLACEHOLDERS)]
    TooManyPlaceholders {
        /// The predicate's column name.
        column: String,
        /// The placeholder count supplied.
        count: usize,
    },

    /// A subquery value that is not a `SELECT`.
    #[error("subquery must be a SELECT, got {statement}")]
    NonSelectSubquery {
        /// The subquery's statement kind.
        statement: StatementKind,
    },

    /// A clause the statement kind cannot carry.
    #[error("{statement} does not support {clause}")]
    UnsupportedClause {
        /// The statement kind.
        statement: StatementKind,
        /// The offending clause.
        clause: &'static str,
    },
}

/// Result type for serialization.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Invalid pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_connections` must be at least one.
    #[error("max_connections must be at least 1, got {0}")]
    InvalidMaxConnections(u32),
}
