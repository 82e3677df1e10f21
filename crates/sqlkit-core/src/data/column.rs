//! Column references and computed (function) columns.

use serde::{Deserialize, Serialize};

/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Optional table qualifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl Column {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a table-qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An argument to a [`ComputedColumn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedArgument {
    /// A column reference.
    Column(Column),
    /// A nested function call.
    Computed(ComputedColumn),
    /// `*`, as in `COUNT(*)`.
    Wildcard,
}

impl From<Column> for ComputedArgument {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<ComputedColumn> for ComputedArgument {
    fn from(computed: ComputedColumn) -> Self {
        Self::Computed(computed)
    }
}

/// A function applied to columns, used in projections (`COUNT(*)`,
/// `MAX(price) AS top`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedColumn {
    /// Function name, emitted verbatim.
    pub function: String,
    /// Function arguments, in call order.
    #[serde(default)]
    pub arguments: Vec<ComputedArgument>,
    /// Optional result alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ComputedColumn {
    /// Creates a function call with no arguments and no alias.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            arguments: vec![],
            alias: None,
        }
    }

    /// `COUNT(*)`.
    #[must_use]
    pub fn count_all() -> Self {
        Self::new("COUNT").argument(ComputedArgument::Wildcard)
    }

    /// Appends an argument.
    #[must_use]
    pub fn argument(mut self, argument: impl Into<ComputedArgument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Sets the result alias.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_constructors() {
        let plain = Column::new("id");
        assert_eq!(plain.table, None);
        assert_eq!(plain.name, "id");

        let qualified = Column::qualified("users", "id");
        assert_eq!(qualified.table.as_deref(), Some("users"));
        assert_eq!(Column::from("id"), plain);
    }

    #[test]
    fn test_computed_builder() {
        let max = ComputedColumn::new("MAX")
            .argument(Column::new("price"))
            .alias("top");
        assert_eq!(max.function, "MAX");
        assert_eq!(max.arguments.len(), 1);
        assert_eq!(max.alias.as_deref(), Some("top"));

        assert_eq!(
            ComputedColumn::count_all().arguments,
            vec![ComputedArgument::Wildcard]
        );
    }
}
