//! Post document model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A post document as returned by the content store.
///
/// The document shape is owned by the store's schema. Only the fields the
/// renderer consumes are mandatory; everything else is optional or preserved
/// verbatim in `extra`, so schema drift in the store cannot break decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    /// Stable document identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Document type in the store schema
    #[serde(rename = "_type", default)]
    pub doc_type: Option<String>,

    /// Post title
    pub title: String,

    /// URL-friendly name
    #[serde(default)]
    pub slug: Option<Slug>,

    /// Publication date
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Creation date recorded by the store
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update recorded by the store
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Short summary shown in listings
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Author display name
    #[serde(default)]
    pub author: Option<String>,

    /// Any remaining schema fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PostDocument {
    /// Create a new document with the minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            doc_type: Some("post".to_string()),
            title: title.into(),
            slug: None,
            published_at: None,
            created_at: None,
            updated_at: None,
            excerpt: None,
            author: None,
            extra: HashMap::new(),
        }
    }
}

/// A slug field as stored by the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}
