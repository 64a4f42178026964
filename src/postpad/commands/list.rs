use crate::commands::CmdResult;
use crate::error::Result;
use crate::render::sort_by_recency;
use crate::store::{PostStore, StorageBackend};

/// All posts, most recently updated first.
pub fn run<B: StorageBackend>(store: &PostStore<B>) -> Result<CmdResult> {
    let posts = store.load_posts();
    Ok(CmdResult::default().with_listed_posts(sort_by_recency(&posts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, update};
    use crate::model::PostDraft;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn lists_recently_updated_first() {
        let store = PostStore::new(MemBackend::new());
        let first = create::run(&store, &PostDraft::new("first", "x"))
            .unwrap()
            .affected_posts
            .remove(0);
        create::run(&store, &PostDraft::new("second", "x")).unwrap();
        update::run(&store, &first.id, &PostDraft::new("first again", "x")).unwrap();

        let titles: Vec<_> = run(&store)
            .unwrap()
            .listed_posts
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["first again", "second"]);

        // storage order is untouched
        assert_eq!(store.load_posts()[0].id, first.id);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = PostStore::new(MemBackend::new());
        assert!(run(&store).unwrap().listed_posts.is_empty());
    }
}
