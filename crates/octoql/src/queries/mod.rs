//! Ready-made GitHub GraphQL queries.
//!
//! Pure builder functions producing `(document, variables)` pairs for
//! [`Client::execute`](crate::Client::execute). Every user-supplied value
//! travels as a named GraphQL variable; nothing is ever spliced into the
//! document text.

mod marketplace;
mod repository;

pub use marketplace::marketplace_categories;
pub use repository::{IssueState, repository_issues};
