//! Axum extractors for request handling
//!
//! Custom extractors for group ids and validated query strings.

mod path;
mod validated;

pub use path::GroupId;
pub use validated::ValidatedQuery;
