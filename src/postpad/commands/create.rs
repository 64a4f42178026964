use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{create_post, PostDraft};
use crate::store::{PostStore, StorageBackend};
use tracing::info;

/// Appends a new post built from `draft`. The draft is expected to be validated.
pub fn run<B: StorageBackend>(store: &PostStore<B>, draft: &PostDraft) -> Result<CmdResult> {
    let mut posts = store.load_posts();
    let post = create_post(draft);
    posts.push(post.clone());
    store.save_posts(&posts);

    info!(id = %post.id, "post created");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Post created: {}", post.title)));
    Ok(result.with_affected_posts(vec![post]))
}
