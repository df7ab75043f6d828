//! hubql compiler: one nested GraphQL document per request.
//!
//! Given a [`Registry`](hubql_core::Registry), a root resource, and the set of
//! resources to embed, the compiler resolves parent/child links, merges the
//! variable declarations of everything selected, and renders a single query
//! document that always ends with the rate-limit selection.
//!
//! - `variables` - ordered, de-duplicated variable declarations
//! - `tree` - transient render tree and its fold
//! - `compiler` - resolution rules and the [`QueryBuilder`] facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod compiler;
mod tree;
mod variables;

#[cfg(test)]
mod test_utils;

use hubql_core::ResourceId;

pub use compiler::{CompiledQuery, QueryBuilder, SkipReason, Skipped, compile};
pub use tree::RATE_LIMIT_FRAGMENT;
pub use variables::VariableSet;

/// Configuration errors. Each one fails the compile call it occurred in and
/// is not worth retrying: the same inputs fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The root is required to produce any document at all.
    #[error("root resource `{0}` is not registered")]
    UnknownRoot(ResourceId),

    #[error("cyclic parent chain: {}", join(.0, " -> "))]
    CyclicParentChain(Vec<ResourceId>),

    #[error("variable `${name}` declared as both `{first}` and `{second}`")]
    ConflictingVariable {
        name: String,
        first: String,
        second: String,
    },

    /// Strict mode only.
    #[error("{} requested resources not in document: {}", .0.len(), join(.0, ", "))]
    Unresolved(Vec<Skipped>),
}

fn join<T: std::fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, Error>;
