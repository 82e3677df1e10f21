//! SQL dialect support.
//!
//! Databases disagree on how identifiers are quoted, how bind parameters
//! are written and, occasionally, how an operator is spelled. A [`Dialect`]
//! answers exactly those questions; the [`Serializer`](crate::Serializer)
//! assembles statements once, for every dialect, in terms of these hooks.

mod general;
mod postgres;

pub use general::GeneralDialect;
pub use postgres::PostgresDialect;

use crate::data::Comparison;
use crate::serializer::Bind;

/// How a dialect writes bind parameters.
///
/// Positional and numbered dialects ignore [`Bind::name`]. Named dialects
/// use it, so the advisory names (`<column>`, `<column>.min`,
/// `<column>.max`) only show up in their output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?`, bound strictly by occurrence order.
    Positional,
    /// `$1`, `$2`, ... carrying the bind position.
    Numbered,
    /// `:name`, carrying the advisory bind name.
    Named,
}

impl PlaceholderStyle {
    /// Returns a short label for the style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Numbered => "numbered",
            Self::Named => "named",
        }
    }
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '`'
    }

    /// Returns the bind parameter style.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Positional
    }

    /// Quotes a table or column name.
    ///
    /// Embedded quote characters are doubled so the name cannot terminate
    /// its own quoting.
    fn escape_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut escaped = String::with_capacity(name.len() + 2);
        escaped.push(quote);
        for ch in name.chars() {
            if ch == quote {
                escaped.push(quote);
            }
            escaped.push(ch);
        }
        escaped.push(quote);
        escaped
    }

    /// Renders one bind parameter.
    fn placeholder(&self, bind: &Bind) -> String {
        let _ = bind;
        String::from("?")
    }

    /// Returns the operator text for a comparison.
    fn comparison_operator<'a>(&self, comparison: &'a Comparison) -> &'a str {
        comparison.as_sql()
    }
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn identifier_quote(&self) -> char {
        (**self).identifier_quote()
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        (**self).placeholder_style()
    }

    fn escape_identifier(&self, name: &str) -> String {
        (**self).escape_identifier(name)
    }

    fn placeholder(&self, bind: &Bind) -> String {
        (**self).placeholder(bind)
    }

    fn comparison_operator<'a>(&self, comparison: &'a Comparison) -> &'a str {
        (**self).comparison_operator(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bracketed;

    impl Dialect for Bracketed {
        fn name(&self) -> &'static str {
            "bracketed"
        }

        fn escape_identifier(&self, name: &str) -> String {
            format!("[{name}]")
        }
    }

    #[test]
    fn test_default_escaping_doubles_quotes() {
        let dialect = GeneralDialect::new();
        assert_eq!(dialect.escape_identifier("users"), "`users`");
        assert_eq!(dialect.escape_identifier("we`ird"), "`we``ird`");
    }

    fn escape_with<D: Dialect>(dialect: D, name: &str) -> String {
        dialect.escape_identifier(name)
    }

    #[test]
    fn test_overridden_escaping_through_reference() {
        let dialect = Bracketed;
        assert_eq!(escape_with(&dialect, "users"), "[users]");
        let by_ref: &dyn Dialect = &dialect;
        assert_eq!(escape_with(by_ref, "users"), "[users]");
    }

    #[test]
    fn test_placeholder_style_labels() {
        assert_eq!(PlaceholderStyle::Positional.as_str(), "positional");
        assert_eq!(PlaceholderStyle::Numbered.as_str(), "numbered");
        assert_eq!(PlaceholderStyle::Named.as_str(), "named");
    }
}
