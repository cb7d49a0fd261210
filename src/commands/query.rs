//! Run a raw query against the content store

use anyhow::Result;

use crate::Postboard;

/// Execute the query text and pretty-print the JSON result
pub async fn run(app: &Postboard, query: &str) -> Result<()> {
    let store = app.store()?;
    let result = store.query_raw(query).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
