use crate::commands::CmdResult;
use crate::error::{PostpadError, Result};
use crate::store::{PostStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &PostStore<B>, id: &str) -> Result<CmdResult> {
    let post = store
        .load_posts()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| PostpadError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_posts(vec![post]))
}
