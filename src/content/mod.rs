//! Content module - post documents and named queries

mod post;
pub mod query;

pub use post::{PostDocument, Slug};
pub use query::QueryRef;
