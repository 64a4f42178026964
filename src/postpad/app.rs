//! # Application Controller
//!
//! [`App`] turns user actions into command calls and mirrors the outcome onto
//! the presenter:
//!
//! ```text
//! action ─▶ App ─▶ command ─▶ PostStore (load) ─▶ mutate ─▶ PostStore (save)
//!                                                              │
//!           presenter ◀── render_list ◀── PostStore (load) ◀───┘
//! ```
//!
//! The controller never holds posts between actions. Each action loads the
//! collection fresh, so anything another writer did in between is picked up,
//! and anything it removed turns the action into a silent no-op.

use crate::commands::{self, CmdResult};
use crate::editor::{validate, Editor};
use crate::error::{Result, ValidationError};
use crate::model::Post;
use crate::presenter::Presenter;
use crate::render::{render_list, DEFAULT_PREVIEW_CHARS};
use crate::store::{PostStore, StorageBackend};
use tracing::debug;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Editor was closed; nothing to submit.
    Ignored,
    /// Form rejected; the user was alerted and the editor stays open.
    Invalid(ValidationError),
    Created(CmdResult),
    Updated(CmdResult),
    /// The post under edit disappeared from storage before the save.
    EditDropped { id: String },
}

impl SubmitOutcome {
    /// The created or updated post, if any.
    pub fn post(&self) -> Option<&Post> {
        match self {
            SubmitOutcome::Created(r) | SubmitOutcome::Updated(r) => r.affected_posts.first(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Opened,
    /// No stored post has that id; nothing happened.
    Missing,
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted(CmdResult),
    Declined,
    /// Confirmed, but the post was already gone.
    Missing,
}

pub struct App<B: StorageBackend, P: Presenter> {
    store: PostStore<B>,
    presenter: P,
    editor: Editor,
    preview_chars: usize,
}

impl<B: StorageBackend, P: Presenter> App<B, P> {
    pub fn new(store: PostStore<B>, presenter: P) -> Self {
        Self {
            store,
            presenter,
            editor: Editor::new(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn store(&self) -> &PostStore<B> {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Initial render.
    pub fn start(&mut self) {
        self.refresh();
    }

    pub fn open_new(&mut self) {
        let view = self.editor.open_new();
        self.presenter.show_editor(&view);
    }

    /// Opens the editor on a freshly loaded copy of post `id`.
    pub fn open_edit(&mut self, id: &str) -> EditOutcome {
        let posts = self.store.load_posts();
        match posts.iter().find(|p| p.id == id) {
            Some(post) => {
                let view = self.editor.open_edit(post);
                self.presenter.show_editor(&view);
                EditOutcome::Opened
            }
            None => {
                debug!(id = %id, "edit requested for a post that is no longer stored");
                EditOutcome::Missing
            }
        }
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
        self.presenter.hide_editor();
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if !self.editor.is_open() {
            return Ok(SubmitOutcome::Ignored);
        }

        let form = self.presenter.read_form()?;
        self.editor.bind(form.clone());

        let draft = match validate(&form) {
            Ok(draft) => draft,
            Err(e) => {
                self.presenter.alert(&e.to_string());
                return Ok(SubmitOutcome::Invalid(e));
            }
        };

        let outcome = match self.editor.editing_target().map(str::to_string) {
            Some(id) => {
                let result = commands::update::run(&self.store, &id, &draft)?;
                if result.affected_posts.is_empty() {
                    SubmitOutcome::EditDropped { id }
                } else {
                    SubmitOutcome::Updated(result)
                }
            }
            None => SubmitOutcome::Created(commands::create::run(&self.store, &draft)?),
        };

        self.refresh();
        self.editor.finish();
        self.presenter.hide_editor();
        Ok(outcome)
    }

    /// Deletes post `id` after the user confirms.
    pub fn delete(&mut self, id: &str) -> Result<DeleteOutcome> {
        let prompt = match self.store.load_posts().iter().find(|p| p.id == id) {
            Some(post) => format!("Delete \"{}\"?", post.title),
            None => "Delete this post?".to_string(),
        };
        if !self.presenter.confirm(&prompt) {
            return Ok(DeleteOutcome::Declined);
        }

        let result = commands::delete::run(&self.store, id)?;
        self.refresh();
        if result.affected_posts.is_empty() {
            Ok(DeleteOutcome::Missing)
        } else {
            Ok(DeleteOutcome::Deleted(result))
        }
    }

    /// Full post for display, `None` if it is not stored.
    pub fn view(&self, id: &str) -> Option<Post> {
        commands::view::run(&self.store, id)
            .ok()
            .and_then(|mut r| r.listed_posts.pop())
    }

    fn refresh(&mut self) {
        let posts = commands::list::run(&self.store)
            .map(|r| r.listed_posts)
            .unwrap_or_default();
        let view = render_list(&posts, self.preview_chars);
        self.presenter.render_list(&view);
    }
}
