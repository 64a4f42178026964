//! # Editor State
//!
//! The editor panel is either closed, creating a new post, or editing one
//! specific post:
//!
//! ```text
//!            open_new                     open_edit(post)
//!   Closed ───────────▶ Creating   any ───────────────▶ Editing { id }
//!     ▲                    │                                  │
//!     └──── cancel/finish ─┴──────────── cancel/finish ───────┘
//! ```
//!
//! Transitions are plain methods on [`Editor`] with no side effects; the
//! application controller mirrors each one onto the presenter. A rejected
//! submission is simply the absence of a transition.

use crate::error::ValidationError;
use crate::model::{Post, PostDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Creating,
    Editing {
        id: String,
    },
}

/// The two form fields, as currently typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    pub title: String,
    pub content: String,
}

impl EditorForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn from_post(post: &Post) -> Self {
        Self::new(post.title.clone(), post.content.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    New,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

/// What the presenter needs to show an open editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub mode: EditorMode,
    pub heading: &'static str,
    pub form: EditorForm,
    pub focus: Field,
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    form: EditorForm,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn form(&self) -> &EditorForm {
        &self.form
    }

    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    /// Id of the post being edited, if any.
    pub fn editing_target(&self) -> Option<&str> {
        match &self.state {
            EditorState::Editing { id } => Some(id),
            _ => None,
        }
    }

    pub fn open_new(&mut self) -> EditorView {
        self.state = EditorState::Creating;
        self.form = EditorForm::default();
        self.view(EditorMode::New)
    }

    pub fn open_edit(&mut self, post: &Post) -> EditorView {
        self.state = EditorState::Editing {
            id: post.id.clone(),
        };
        self.form = EditorForm::from_post(post);
        self.view(EditorMode::Edit)
    }

    /// Records what the user typed. Ignored while closed.
    pub fn bind(&mut self, form: EditorForm) {
        if self.is_open() {
            self.form = form;
        }
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Closes the editor after a successful submission.
    pub fn finish(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = EditorState::Closed;
        self.form = EditorForm::default();
    }

    fn view(&self, mode: EditorMode) -> EditorView {
        EditorView {
            mode,
            heading: match mode {
                EditorMode::New => "New post",
                EditorMode::Edit => "Edit post",
            },
            form: self.form.clone(),
            focus: Field::Title,
        }
    }
}

/// Accepts a form whose title and content are both non-empty after trimming.
pub fn validate(form: &EditorForm) -> Result<PostDraft, ValidationError> {
    let title = form.title.trim();
    let content = form.content.trim();
    match (title.is_empty(), content.is_empty()) {
        (true, true) => Err(ValidationError::MissingFields),
        (true, false) => Err(ValidationError::MissingTitle),
        (false, true) => Err(ValidationError::MissingContent),
        (false, false) => Ok(PostDraft::new(title, content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::create_post;

    #[test]
    fn starts_closed() {
        let editor = Editor::new();
        assert_eq!(editor.state(), &EditorState::Closed);
        assert!(editor.editing_target().is_none());
        assert!(!editor.is_open());
    }

    #[test]
    fn open_new_clears_form_and_focuses_title() {
        let mut editor = Editor::new();
        let post = create_post(&PostDraft::new("T", "C"));
        editor.open_edit(&post);

        let view = editor.open_new();
        assert_eq!(editor.state(), &EditorState::Creating);
        assert_eq!(view.mode, EditorMode::New);
        assert_eq!(view.form, EditorForm::default());
        assert_eq!(view.focus, Field::Title);
        assert!(editor.editing_target().is_none());
    }

    #[test]
    fn open_edit_populates_form_and_sets_target() {
        let mut editor = Editor::new();
        let post = create_post(&PostDraft::new("Title", "Body"));
        let view = editor.open_edit(&post);

        assert_eq!(editor.editing_target(), Some(post.id.as_str()));
        assert_eq!(view.mode, EditorMode::Edit);
        assert_eq!(view.heading, "Edit post");
        assert_eq!(view.form, EditorForm::new("Title", "Body"));
    }

    #[test]
    fn open_edit_switches_target() {
        let mut editor = Editor::new();
        let a = create_post(&PostDraft::new("A", "a"));
        let b = create_post(&PostDraft::new("B", "b"));
        editor.open_edit(&a);
        editor.open_edit(&b);
        assert_eq!(editor.editing_target(), Some(b.id.as_str()));
        assert_eq!(editor.form().title, "B");
    }

    #[test]
    fn cancel_closes_and_clears() {
        let mut editor = Editor::new();
        let post = create_post(&PostDraft::new("A", "a"));
        editor.open_edit(&post);
        editor.bind(EditorForm::new("typed", "stuff"));
        editor.cancel();

        assert_eq!(editor.state(), &EditorState::Closed);
        assert_eq!(editor.form(), &EditorForm::default());
        assert!(editor.editing_target().is_none());
    }

    #[test]
    fn bind_is_ignored_while_closed() {
        let mut editor = Editor::new();
        editor.bind(EditorForm::new("x", "y"));
        assert_eq!(editor.form(), &EditorForm::default());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(
            validate(&EditorForm::new(" ", "body")),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            validate(&EditorForm::new("title", "\n\t")),
            Err(ValidationError::MissingContent)
        );
        assert_eq!(
            validate(&EditorForm::new("", "")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn validate_trims_accepted_fields() {
        let draft = validate(&EditorForm::new("  A ", " B\n")).unwrap();
        assert_eq!(draft, PostDraft::new("A", "B"));
    }
}
