//! List posts from the content store

use anyhow::Result;

use crate::Postboard;

/// Fetch the post collection and print one line per post
pub async fn run(app: &Postboard) -> Result<()> {
    let store = app.store()?;
    let posts = store.fetch_posts().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unpublished".to_string());
        println!("  {} - {} [{}]", date, post.title, post.id);
    }

    Ok(())
}
