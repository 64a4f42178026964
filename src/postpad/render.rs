//! # List Rendering
//!
//! [`render_list`] projects the post collection into a [`ListView`]: a
//! presentation-neutral description of what the list shows. Clients draw it
//! however they like; [`ListView::to_html`] draws it as markup.
//!
//! Text in a `ListView` is raw user text. Escaping happens at the moment text
//! is interpolated into markup, so a terminal client never sees entities and
//! the markup renderer never sees unescaped input.

use crate::format::{escape_html, format_date, truncate_chars};
use crate::model::{Post, Timestamp};
use std::fmt;

pub const DEFAULT_PREVIEW_CHARS: usize = 160;
pub const EMPTY_MESSAGE: &str = "No posts yet. Create your first post!";

/// A control attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Edit => write!(f, "edit"),
            ActionKind::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub kind: ActionKind,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    /// 1-based position in display order.
    pub position: usize,
    pub title: String,
    pub preview: String,
    pub updated_at: Timestamp,
    /// `updated_at` formatted for display.
    pub updated: String,
    pub actions: [CardAction; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty { message: String },
    Cards(Vec<PostCard>),
}

/// Copy of `posts` ordered by `updated_at` descending. Ties keep their order;
/// posts with an unreadable `updated_at` come last.
pub fn sort_by_recency(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.updated_at.instant().cmp(&a.updated_at.instant()));
    sorted
}

pub fn render_list(posts: &[Post], preview_chars: usize) -> ListView {
    if posts.is_empty() {
        return ListView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    let cards = sort_by_recency(posts)
        .into_iter()
        .enumerate()
        .map(|(i, post)| PostCard {
            position: i + 1,
            title: post.title,
            preview: truncate_chars(&post.content, preview_chars).to_string(),
            updated: format_date(post.updated_at.as_str()),
            updated_at: post.updated_at,
            actions: [
                CardAction {
                    kind: ActionKind::Edit,
                    post_id: post.id.clone(),
                },
                CardAction {
                    kind: ActionKind::Delete,
                    post_id: post.id.clone(),
                },
            ],
            id: post.id,
        })
        .collect();

    ListView::Cards(cards)
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty { .. })
    }

    pub fn cards(&self) -> &[PostCard] {
        match self {
            ListView::Empty { .. } => &[],
            ListView::Cards(cards) => cards,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            ListView::Empty { message } => {
                format!("<p class=\"empty\">{}</p>\n", escape_html(message))
            }
            ListView::Cards(cards) => cards.iter().map(PostCard::to_html).collect(),
        }
    }
}

impl PostCard {
    pub fn to_html(&self) -> String {
        let id = escape_html(&self.id);
        let mut html = String::new();
        html.push_str(&format!("<article class=\"post-card\" data-id=\"{}\">\n", id));
        html.push_str(&format!(
            "  <h3 class=\"post-title\">{}</h3>\n",
            escape_html(&self.title)
        ));
        html.push_str(&format!(
            "  <p class=\"post-content\">{}</p>\n",
            escape_html(&self.preview)
        ));
        html.push_str("  <div class=\"post-meta\">\n");
        html.push_str(&format!(
            "    <time>{}</time>\n",
            escape_html(&self.updated)
        ));
        for action in &self.actions {
            let label = match action.kind {
                ActionKind::Edit => "Edit",
                ActionKind::Delete => "Delete",
            };
            html.push_str(&format!(
                "    <button type=\"button\" data-action=\"{}\" data-id=\"{}\">{}</button>\n",
                action.kind,
                escape_html(&action.post_id),
                label
            ));
        }
        html.push_str("  </div>\n</article>\n");
        html
    }
}
