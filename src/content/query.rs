//! Named content queries
//!
//! Queries are predefined retrieval specifications executed against the
//! content store. Nothing in them varies per request.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// A named reference to a predefined content store query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRef {
    /// Stable name, used in logs
    pub name: &'static str,
    /// Query source text
    pub text: &'static str,
}

impl QueryRef {
    /// All post documents, newest first
    pub const ALL_POSTS: QueryRef = QueryRef {
        name: "all-posts",
        text: r#"*[_type == "post"] | order(publishedAt desc)"#,
    };

    /// Percent-encode the query text for use in a URL query string
    pub fn encoded(&self) -> String {
        encode_query(self.text)
    }
}

impl std::fmt::Display for QueryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Percent-encode arbitrary query text
pub fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}
