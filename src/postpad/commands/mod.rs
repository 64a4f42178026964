//! # Command Layer
//!
//! Business logic for each user action. Every command:
//!
//! - loads the whole collection fresh from the [`PostStore`](crate::store::PostStore),
//! - mutates it in memory,
//! - writes the whole collection back (mutations only),
//! - returns a [`CmdResult`] describing what happened.
//!
//! Commands never print, prompt or validate form input; those concerns belong
//! to the application controller and the client.

use crate::config::PostpadConfig;
use crate::model::Post;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Posts created, changed or removed by the command.
    pub affected_posts: Vec<Post>,
    /// Posts to display, already in display order.
    pub listed_posts: Vec<Post>,
    pub config: Option<PostpadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_config(mut self, config: PostpadConfig) -> Self {
        self.config = Some(config);
        self
    }
}
