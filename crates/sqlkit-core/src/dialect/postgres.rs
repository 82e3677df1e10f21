//! PostgreSQL dialect.

use super::{Dialect, PlaceholderStyle};
use crate::serializer::Bind;

/// PostgreSQL: double-quoted identifiers and numbered `$n` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered
    }

    fn placeholder(&self, bind: &Bind) -> String {
        format!("${}", bind.position)
    }
}
