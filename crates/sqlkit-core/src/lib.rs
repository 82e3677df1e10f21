//! # sqlkit-core
//!
//! A dialect-agnostic IR for SQL statements and the serializer that renders
//! it into SQL text.
//!
//! This crate provides:
//! - Plain value types describing statements, predicates, joins and
//!   grouping ([`data`])
//! - A [`Dialect`] trait capturing identifier quoting, placeholder syntax
//!   and operator spelling, with general and PostgreSQL implementations
//! - A [`Serializer`] that assembles statements once for every dialect
//!
//! ## Rendering a statement
//!
//! ```rust
//! use sqlkit_core::data::{Column, DataQuery, Join};
//! use sqlkit_core::Serializer;
//!
//! let query = DataQuery::select("foo").join(Join::inner(
//!     Column::qualified("foo", "id"),
//!     Column::qualified("bar", "foo_id"),
//! ));
//!
//! assert_eq!(
//!     Serializer::general().serialize_query(&query).unwrap(),
//!     "SELECT `foo`.* FROM `foo` JOIN `bar` ON `foo`.`id` = `bar`.`foo_id`"
//! );
//! ```
//!
//! ## Bind parameters
//!
//! Values never enter the IR. Every placeholder the serializer emits is
//! reported as a [`Bind`] in the order it appears, and the caller supplies
//! values in that same order:
//!
//! ```rust
//! use sqlkit_core::data::{DataQuery, Predicate};
//! use sqlkit_core::{PostgresDialect, Serializer};
//!
//! let query = DataQuery::select("users").filter(Predicate::between("age"));
//! let rendered = Serializer::new(PostgresDialect::new()).serialize(&query).unwrap();
//!
//! assert_eq!(rendered.sql, r#"SELECT * FROM "users" WHERE ("age" BETWEEN $1 AND $2)"#);
//! assert_eq!(rendered.binds[0].name, "age.min");
//! assert_eq!(rendered.binds[1].name, "age.max");
//! ```

pub mod config;
pub mod data;
pub mod dialect;
pub mod error;
pub mod serializer;

pub use config::PoolConfig;
pub use data::DataQuery;
pub use dialect::{Dialect, GeneralDialect, PlaceholderStyle, PostgresDialect};
pub use error::{ConfigError, Result, SerializeError, MAX_PLACEHOLDERS};
pub use serializer::{Bind, SerializedQuery, Serializer};
