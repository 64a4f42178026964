//! # Selectors
//!
//! Post ids are UUIDs: stable, but not something anyone wants to type. The
//! client therefore accepts a *selector*:
//!
//! - `3` is the third post of the list as currently displayed (most recently
//!   updated first, 1-based),
//! - anything else is an exact id, or a unique prefix of an id at least
//!   [`MIN_PREFIX_LEN`] chars long.
//!
//! UUIDs can start with digits, so a number past the end of the list is
//! retried as an id prefix, and a number with a leading zero is never a
//! position.
//!
//! Positions are recomputed from storage on every invocation, so `1` always
//! means "the post at the top of the list right now".

use crate::error::{PostpadError, Result};
use crate::model::Post;
use crate::render::sort_by_recency;
use std::fmt;
use std::str::FromStr;

pub const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Id(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "{}", n),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selector {
    type Err = PostpadError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PostpadError::Api("Empty post selector".to_string()));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Ok(Selector::Id(s.to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(PostpadError::Api(
                "Positions start at 1".to_string(),
            )),
            Ok(n) => Ok(Selector::Position(n)),
            Err(_) => Ok(Selector::Id(s.to_string())),
        }
    }
}

/// Resolves a selector against `posts` (in any order) to a post id.
pub fn resolve(posts: &[Post], selector: &Selector) -> Result<String> {
    match selector {
        Selector::Position(n) => match sort_by_recency(posts).into_iter().nth(n - 1) {
            Some(post) => Ok(post.id),
            None => match resolve_id(posts, &n.to_string()) {
                Err(PostpadError::NotFound(_)) => {
                    Err(PostpadError::Api(format!("No post at position {}", n)))
                }
                other => other,
            },
        },
        Selector::Id(id) => resolve_id(posts, id),
    }
}

fn resolve_id(posts: &[Post], id: &str) -> Result<String> {
    if let Some(post) = posts.iter().find(|p| p.id == id) {
        return Ok(post.id.clone());
    }
    if id.chars().count() < MIN_PREFIX_LEN {
        return Err(PostpadError::NotFound(id.to_string()));
    }
    let matches: Vec<_> = posts.iter().filter(|p| p.id.starts_with(id)).collect();
    match matches.as_slice() {
        [] => Err(PostpadError::NotFound(id.to_string())),
        [post] => Ok(post.id.clone()),
        _ => Err(PostpadError::Api(format!(
            "Id prefix {} matches {} posts",
            id,
            matches.len()
        ))),
    }
}
