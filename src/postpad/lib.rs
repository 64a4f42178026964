//! # Postpad Architecture
//!
//! Postpad is a small post editor: a single collection of posts, kept as one JSON
//! array under one key of a key-value store, shown as a list with an editor panel.
//!
//! The library knows nothing about terminals, browsers or files. Everything that
//! touches the outside world goes through one of two injected ports:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (cli/, wired by main.rs)                            │
//! │  - Parses arguments, implements the Presenter port          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Application Controller (app.rs)                            │
//! │  - Editor state (editor.rs), validation, confirmation       │
//! │  - Re-reads the store on every action, re-renders after     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the post collection             │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StorageBackend` key-value port                          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! │  - `PostStore`: whole-collection load/save, safe decode     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `app.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never prompts. Alerts, confirmations and the editor panel are
//! presenter calls, so the same core could drive a web page or a TUI.
//!
//! ## Module Overview
//!
//! - [`app`]: the application controller
//! - [`commands`]: business logic for each action
//! - [`store`]: storage port, backends and the post persistence adapter
//! - [`model`]: the `Post` record and its factory
//! - [`editor`]: editor state machine and form binding
//! - [`render`]: list projection and markup rendering
//! - [`format`]: escaping, date formatting, truncation
//! - [`presenter`]: the presentation port
//! - [`index`]: resolving user selectors to post ids
//! - [`config`]: configuration management
//! - [`external`]: `$EDITOR` integration
//! - [`error`]: error types

pub mod app;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod external;
pub mod format;
pub mod index;
pub mod model;
pub mod presenter;
pub mod render;
pub mod store;
