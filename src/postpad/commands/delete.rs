use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{PostStore, StorageBackend};
use tracing::info;

/// Removes post `id`. Deleting an id that is not stored changes nothing.
pub fn run<B: StorageBackend>(store: &PostStore<B>, id: &str) -> Result<CmdResult> {
    let posts = store.load_posts();
    let (removed, kept): (Vec<_>, Vec<_>) = posts.into_iter().partition(|p| p.id == id);
    store.save_posts(&kept);

    let mut result = CmdResult::default();
    for post in &removed {
        info!(id = %post.id, "post deleted");
        result.add_message(CmdMessage::success(format!("Post deleted: {}", post.title)));
    }
    Ok(result.with_affected_posts(removed))
}
