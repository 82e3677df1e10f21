//! Render JSON-encoded sqlkit queries from the command line.
//!
//! A query document is the serde encoding of
//! [`DataQuery`](sqlkit_core::DataQuery):
//!
//! ```json
//! {
//!   "statement": "select",
//!   "table": "users",
//!   "predicates": [
//!     {"predicate": {"column": {"name": "id"}, "comparison": "equal", "value": {"placeholders": 1}}}
//!   ]
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Render with the default dialect
//! sqlkit render query.json
//!
//! # Render for PostgreSQL from stdin, listing binds
//! sqlkit --dialect postgres render --binds < query.json
//!
//! # Show available dialects
//! sqlkit dialects
//! ```

pub mod error;

use clap::ValueEnum;
use sqlkit_core::{DataQuery, Dialect, GeneralDialect, PostgresDialect, SerializedQuery, Serializer};
use sqlkit_sqlite::SqliteDialect;
use tracing::debug;

pub use error::{RenderError, Result};

/// Dialects selectable with `--dialect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectName {
    /// Backtick identifiers, `?` placeholders.
    General,
    /// Double-quoted identifiers, `$n` placeholders.
    Postgres,
    /// Double-quoted identifiers, `?n` placeholders.
    Sqlite,
}

impl DialectName {
    /// Every selectable dialect, in listing order.
    pub const ALL: [Self; 3] = [Self::General, Self::Postgres, Self::Sqlite];

    /// Decodes `json` and renders it for this dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a query document or the query
    /// cannot be rendered.
    pub fn render_json(self, json: &str) -> Result<SerializedQuery> {
        let query: DataQuery = serde_json::from_str(json)?;
        debug!(
            dialect = ?self,
            statement = %query.statement,
            table = %query.table,
            "Decoded query document"
        );
        match self {
            Self::General => render(GeneralDialect::new(), &query),
            Self::Postgres => render(PostgresDialect::new(), &query),
            Self::Sqlite => render(SqliteDialect::new(), &query),
        }
    }

    /// One `name quote style` line describing the dialect.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::General => describe(&GeneralDialect::new()),
            Self::Postgres => describe(&PostgresDialect::new()),
            Self::Sqlite => describe(&SqliteDialect::new()),
        }
    }
}

fn render<D: Dialect>(dialect: D, query: &DataQuery) -> Result<SerializedQuery> {
    Ok(Serializer::new(dialect).serialize(query)?)
}

fn describe(dialect: &dyn Dialect) -> String {
    format!(
        "{:<12}{:<6}{}",
        dialect.name(),
        dialect.identifier_quote(),
        dialect.placeholder_style().as_str()
    )
}

/// Formats a rendered statement for output.
///
/// With `binds`, each bind follows the SQL as a `position name` line.
#[must_use]
pub fn format_rendered(rendered: &SerializedQuery, binds: bool) -> String {
    let mut out = rendered.sql.clone();
    if binds {
        for bind in &rendered.binds {
            out.push_str(&format!("\n{} {}", bind.position, bind.name));
        }
    }
    out
}
