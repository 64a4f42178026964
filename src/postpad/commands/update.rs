use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PostDraft;
use crate::store::{PostStore, StorageBackend};
use tracing::{debug, info};

/// Replaces title and content of post `id` and bumps its `updated_at`.
///
/// If `id` is no longer stored the edit is dropped; the collection is still
/// written back unchanged.
pub fn run<B: StorageBackend>(
    store: &PostStore<B>,
    id: &str,
    draft: &PostDraft,
) -> Result<CmdResult> {
    let mut posts = store.load_posts();
    let mut result = CmdResult::default();

    match posts.iter_mut().find(|p| p.id == id) {
        Some(post) => {
            post.apply_edit(draft);
            info!(id = %post.id, "post updated");
            result.add_message(CmdMessage::success(format!("Post updated: {}", post.title)));
            result.affected_posts.push(post.clone());
        }
        None => {
            debug!(id = %id, "edit target is gone, dropping edit");
        }
    }

    store.save_posts(&posts);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn updates_fields_and_keeps_identity() {
        let store = PostStore::new(MemBackend::new());
        let created = create::run(&store, &PostDraft::new("A", "B"))
            .unwrap()
            .affected_posts
            .remove(0);

        run(&store, &created.id, &PostDraft::new("A2", "B")).unwrap();

        let posts = store.load_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.id);
        assert_eq!(posts[0].created_at, created.created_at);
        assert_eq!(posts[0].title, "A2");
        assert_eq!(posts[0].content, "B");
        assert!(posts[0].updated_at > created.updated_at);
    }

    #[test]
    fn leaves_other_posts_alone() {
        let store = PostStore::new(MemBackend::new());
        create::run(&store, &PostDraft::new("keep", "me")).unwrap();
        let target = create::run(&store, &PostDraft::new("edit", "me"))
            .unwrap()
            .affected_posts
            .remove(0);
        let before = store.load_posts();

        run(&store, &target.id, &PostDraft::new("edited", "you")).unwrap();

        let after = store.load_posts();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].title, "edited");
    }

    #[test]
    fn missing_target_drops_edit() {
        let store = PostStore::new(MemBackend::new());
        create::run(&store, &PostDraft::new("A", "B")).unwrap();
        let before = store.load_posts();

        let result = run(&store, "gone", &PostDraft::new("X", "Y")).unwrap();

        assert!(result.affected_posts.is_empty());
        assert_eq!(store.load_posts(), before);
    }

    #[test]
    fn editing_a_post_with_blank_timestamps_stamps_it() {
        let store = PostStore::new(MemBackend::new());
        store.backend().set_raw(
            "posts",
            r#"[{"id":"old","title":"T","content":"C","createdAt":"","updatedAt":""}]"#,
        );

        run(&store, "old", &PostDraft::new("T2", "C")).unwrap();

        let posts = store.load_posts();
        assert_eq!(posts[0].title, "T2");
        assert_eq!(posts[0].created_at.as_str(), "");
        assert!(posts[0].updated_at.instant().is_some());
    }
}
