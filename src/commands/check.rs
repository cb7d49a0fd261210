//! Check content store reachability

use anyhow::Result;

use crate::Postboard;

/// Ping the content store and report the outcome
pub async fn run(app: &Postboard) -> Result<()> {
    let store = app.store()?;

    if let Err(e) = store.ping().await {
        anyhow::bail!("content store unreachable: {}", e);
    }

    println!(
        "Content store is reachable ({})",
        app.config.store.query_endpoint()
    );
    Ok(())
}
