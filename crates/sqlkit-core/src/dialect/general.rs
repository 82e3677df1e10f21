//! General SQL dialect.

use super::Dialect;

/// The default dialect: backtick-quoted identifiers and positional `?`
/// placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralDialect;

impl GeneralDialect {
    /// Creates a new general dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GeneralDialect {
    fn name(&self) -> &'static str {
        "general"
    }
}
