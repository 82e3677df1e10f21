//! # sqlkit-sqlite
//!
//! SQLite dialect for `sqlkit-core`.
//!
//! # How SQLite differs from the general dialect
//!
//! - **Identifier quoting**: SQLite uses double quotes (`"`) as the
//!   standard quoting style, though it also accepts backticks and square
//!   brackets. See [SQLite keywords].
//! - **[Parameters]**: SQLite accepts `?`, `?NNN`, `:AAAA`, `@AAAA` and
//!   `$AAAA`. Named parameters that share a name share a slot, so an
//!   `IN (...)` list built from one column would collapse into a single
//!   value. This dialect writes `?NNN` with the bind position instead,
//!   which keeps every slot distinct and is what `sqlx` binds.
//!
//! [SQLite keywords]: https://www.sqlite.org/lang_keywords.html
//! [Parameters]: https://www.sqlite.org/lang_expr.html#varparam
//!
//! ## Example
//!
//! ```rust
//! use sqlkit_core::data::{DataQuery, Predicate};
//! use sqlkit_core::Serializer;
//! use sqlkit_sqlite::SqliteDialect;
//!
//! let query = DataQuery::select("users")
//!     .filter(Predicate::in_list("id", 3))
//!     .filter(Predicate::is_null("deleted_at"));
//!
//! let rendered = Serializer::new(SqliteDialect::new()).serialize(&query).unwrap();
//! assert_eq!(
//!     rendered.sql,
//!     r#"SELECT * FROM "users" WHERE ("id" IN (?1, ?2, ?3) AND "deleted_at" IS NULL)"#
//! );
//! ```

mod dialect;

pub use dialect::SqliteDialect;
