//! Rendering IR into SQL text.
//!
//! [`Serializer`] walks a [`DataQuery`] and its predicate tree and produces
//! one SQL string together with the ordered list of bind slots the string
//! contains. All assembly logic lives here and is shared by every dialect;
//! a [`Dialect`] only decides identifier quoting, placeholder syntax and
//! operator spelling.
//!
//! # Example
//!
//! ```rust
//! use sqlkit_core::data::{Column, DataQuery, Predicate, Comparison};
//! use sqlkit_core::Serializer;
//!
//! let query = DataQuery::select("foo")
//!     .filter(Predicate::placeholder("id", Comparison::Equal))
//!     .filter(Predicate::placeholder(Column::qualified("foo", "name"), Comparison::Equal));
//!
//! let rendered = Serializer::general().serialize(&query).unwrap();
//! assert_eq!(rendered.sql, "SELECT * FROM `foo` WHERE (`id` = ? AND `foo`.`name` = ?)");
//! assert_eq!(rendered.binds.len(), 2);
//! ```
//!
//! A serializer holds nothing but its dialect. Bind numbering is scoped to
//! one call, so a serializer can be shared across threads or rebuilt per
//! call with identical results.

mod predicate;
mod query;

use std::fmt;

use tracing::{debug, trace};

use crate::data::{Column, DataQuery};
use crate::dialect::{Dialect, GeneralDialect};
use crate::error::{IdentifierKind, Result, SerializeError};

/// One bind slot in a rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bind {
    /// Advisory name: the column name, or `<column>.min`/`<column>.max`
    /// for `BETWEEN`.
    pub name: String,
    /// 1-based position of the slot in the statement.
    pub position: usize,
}

impl Bind {
    /// Creates a bind slot.
    #[must_use]
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A rendered statement.
///
/// Callers supply bind values in `binds` order; the serializer never sees
/// the values themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedQuery {
    /// The SQL text.
    pub sql: String,
    /// Bind slots, in the order their placeholders appear in `sql`.
    pub binds: Vec<Bind>,
}

impl fmt::Display for SerializedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Renders IR for one dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer<D> {
    dialect: D,
}

impl Serializer<GeneralDialect> {
    /// A serializer for the general dialect.
    #[must_use]
    pub const fn general() -> Self {
        Self::new(GeneralDialect::new())
    }
}

impl<D> Serializer<D> {
    /// Creates a serializer for `dialect`.
    #[must_use]
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }
}

impl<D: Dialect> Serializer<D> {
    /// Renders a full statement and its bind slots.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] when the IR cannot form a valid
    /// statement; no partial SQL is produced.
    pub fn serialize(&self, query: &DataQuery) -> Result<SerializedQuery> {
        let mut binds = Vec::new();
        match self.write_query(query, &mut binds) {
            Ok(sql) => {
                trace!(
                    dialect = self.dialect.name(),
                    statement = %query.statement,
                    table = %query.table,
                    binds = binds.len(),
                    "serialized statement"
                );
                Ok(SerializedQuery { sql, binds })
            }
            Err(err) => {
                debug!(
                    dialect = self.dialect.name(),
                    statement = %query.statement,
                    table = %query.table,
                    error = %err,
                    "rejected statement"
                );
                Err(err)
            }
        }
    }

    /// Renders a full statement, discarding the bind slots.
    pub fn serialize_query(&self, query: &DataQuery) -> Result<String> {
        self.serialize(query).map(|rendered| rendered.sql)
    }

    /// Renders a column reference, table-qualified when a table is set.
    pub fn serialize_column(&self, column: &Column) -> Result<String> {
        let name = self.escape(&column.name, IdentifierKind::Column)?;
        match &column.table {
            Some(table) => Ok(format!(
                "{}.{name}",
                self.escape(table, IdentifierKind::Table)?
            )),
            None => Ok(name),
        }
    }

    fn escape(&self, identifier: &str, kind: IdentifierKind) -> Result<String> {
        if identifier.is_empty() {
            return Err(SerializeError::EmptyIdentifier { kind });
        }
        Ok(self.dialect.escape_identifier(identifier))
    }

    /// Allocates the next bind slot and renders its placeholder.
    fn bind(&self, name: String, binds: &mut Vec<Bind>) -> String {
        let bind = Bind::new(name, binds.len() + 1);
        let placeholder = self.dialect.placeholder(&bind);
        binds.push(bind);
        placeholder
    }
}
