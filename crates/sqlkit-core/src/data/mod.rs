//! Statement IR.
//!
//! Plain value types describing a statement: the table it targets, the
//! columns it projects or writes, its joins, its predicate tree and its
//! grouping/ordering clauses. Nothing in here knows about dialects or
//! produces SQL; see [`crate::serializer`] for that.
//!
//! Values are built by the caller, handed to a serializer by reference and
//! dropped afterwards. The serializer never mutates or keeps them.

mod column;
mod predicate;
mod query;

pub use column::{Column, ComputedArgument, ComputedColumn};
pub use predicate::{
    Comparison, Predicate, PredicateGroup, PredicateGroupRelation, PredicateItem, PredicateValue,
};
pub use query::{
    DataQuery, GroupBy, Join, JoinMethod, OrderBy, OrderDirection, StatementKind,
};
