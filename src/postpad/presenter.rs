//! The presentation port.
//!
//! Everything the application controller wants the user to see or answer goes
//! through a [`Presenter`]. The terminal client implements it with stdout, a
//! `[y/N]` prompt and `$EDITOR`; tests use [`RecordingPresenter`].

use crate::editor::{EditorForm, EditorView};
use crate::error::Result;
use crate::render::ListView;

pub trait Presenter {
    /// Replace the displayed list.
    fn render_list(&mut self, view: &ListView);

    /// Show the editor panel with the given fields.
    fn show_editor(&mut self, view: &EditorView);

    fn hide_editor(&mut self);

    /// Current contents of the form fields.
    fn read_form(&mut self) -> Result<EditorForm>;

    /// Blocking notification.
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question. `false` means the user declined.
    fn confirm(&mut self, message: &str) -> bool;
}

#[cfg(any(test, feature = "test_utils"))]
pub use recording::{PresenterCall, RecordingPresenter};

#[cfg(any(test, feature = "test_utils"))]
mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PresenterCall {
        RenderList(ListView),
        ShowEditor(EditorView),
        HideEditor,
        ReadForm,
        Alert(String),
        Confirm(String),
    }

    /// Presenter that records every call and answers from scripted values.
    ///
    /// `read_form` returns whatever was last shown in the editor, overridden by
    /// `typed` when set; `confirm` answers `confirm_answer`.
    #[derive(Debug, Default)]
    pub struct RecordingPresenter {
        pub calls: Vec<PresenterCall>,
        pub typed: Option<EditorForm>,
        pub confirm_answer: bool,
        shown: EditorForm,
    }

    impl RecordingPresenter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulates the user typing into the form.
        pub fn type_form(&mut self, title: &str, content: &str) {
            self.typed = Some(EditorForm::new(title, content));
        }

        pub fn last_list(&self) -> Option<&ListView> {
            self.calls.iter().rev().find_map(|c| match c {
                PresenterCall::RenderList(view) => Some(view),
                _ => None,
            })
        }

        pub fn alerts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    PresenterCall::Alert(msg) => Some(msg.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&PresenterCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl Presenter for RecordingPresenter {
        fn render_list(&mut self, view: &ListView) {
            self.calls.push(PresenterCall::RenderList(view.clone()));
        }

        fn show_editor(&mut self, view: &EditorView) {
            self.shown = view.form.clone();
            self.typed = None;
            self.calls.push(PresenterCall::ShowEditor(view.clone()));
        }

        fn hide_editor(&mut self) {
            self.shown = EditorForm::default();
            self.typed = None;
            self.calls.push(PresenterCall::HideEditor);
        }

        fn read_form(&mut self) -> Result<EditorForm> {
            self.calls.push(PresenterCall::ReadForm);
            Ok(self.typed.clone().unwrap_or_else(|| self.shown.clone()))
        }

        fn alert(&mut self, message: &str) {
            self.calls.push(PresenterCall::Alert(message.to_string()));
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.calls.push(PresenterCall::Confirm(message.to_string()));
            self.confirm_answer
        }
    }
}
