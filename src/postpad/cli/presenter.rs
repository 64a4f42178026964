use super::print::print_list;
use colored::Colorize;
use console::Term;
use postpad::editor::{EditorForm, EditorView};
use postpad::error::Result;
use postpad::external::edit_form;
use postpad::presenter::Presenter;
use postpad::render::ListView;
use tracing::debug;

/// Where the submitted form comes from.
#[derive(Debug, Clone)]
pub(super) enum FormSource {
    /// Open `$EDITOR` on the current form.
    Editor { file_ext: String },
    /// Use command line values; `None` keeps what the editor was opened with.
    Args {
        title: Option<String>,
        content: Option<String>,
    },
}

impl FormSource {
    /// The editor opens unless disabled or a field was given on the command line.
    pub(super) fn pick(
        title: Option<String>,
        content: Option<String>,
        no_editor: bool,
        file_ext: &str,
    ) -> Self {
        if no_editor || title.is_some() || content.is_some() {
            FormSource::Args { title, content }
        } else {
            FormSource::Editor {
                file_ext: file_ext.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListOutput {
    Terminal,
    Html,
    Hidden,
}

pub(super) struct TerminalPresenter {
    source: FormSource,
    list_output: ListOutput,
    assume_yes: bool,
    shown: Option<EditorForm>,
}

impl TerminalPresenter {
    pub(super) fn new(list_output: ListOutput) -> Self {
        Self {
            source: FormSource::Args {
                title: None,
                content: None,
            },
            list_output,
            assume_yes: false,
            shown: None,
        }
    }

    pub(super) fn with_source(mut self, source: FormSource) -> Self {
        self.source = source;
        self
    }

    pub(super) fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl Presenter for TerminalPresenter {
    fn render_list(&mut self, view: &ListView) {
        match self.list_output {
            ListOutput::Terminal => print_list(view),
            ListOutput::Html => print!("{}", view.to_html()),
            ListOutput::Hidden => {}
        }
    }

    fn show_editor(&mut self, view: &EditorView) {
        debug!(heading = view.heading, "editor opened");
        self.shown = Some(view.form.clone());
    }

    fn hide_editor(&mut self) {
        self.shown = None;
    }

    fn read_form(&mut self) -> Result<EditorForm> {
        let base = self.shown.clone().unwrap_or_default();
        match &self.source {
            FormSource::Args { title, content } => Ok(EditorForm {
                title: title.clone().unwrap_or(base.title),
                content: content.clone().unwrap_or(base.content),
            }),
            FormSource::Editor { file_ext } => edit_form(&base, file_ext),
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let term = Term::stderr();
        if term.write_str(&format!("{} [y/N] ", message)).is_err() {
            return false;
        }
        // non-interactive input reads as an empty line, which declines
        match term.read_line() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpad::editor::{EditorMode, Field};

    fn view(title: &str, content: &str) -> EditorView {
        EditorView {
            mode: EditorMode::Edit,
            heading: "Edit post",
            form: EditorForm::new(title, content),
            focus: Field::Title,
        }
    }

    #[test]
    fn args_override_only_given_fields() {
        let mut presenter = TerminalPresenter::new(ListOutput::Hidden).with_source(
            FormSource::Args {
                title: Some("A2".into()),
                content: None,
            },
        );
        presenter.show_editor(&view("A", "B"));
        assert_eq!(presenter.read_form().unwrap(), EditorForm::new("A2", "B"));
    }

    #[test]
    fn hidden_editor_reads_blank_base() {
        let mut presenter = TerminalPresenter::new(ListOutput::Hidden);
        presenter.show_editor(&view("A", "B"));
        presenter.hide_editor();
        assert_eq!(presenter.read_form().unwrap(), EditorForm::default());
    }

    #[test]
    fn picks_editor_only_without_fields() {
        assert!(matches!(
            FormSource::pick(None, None, false, ".md"),
            FormSource::Editor { .. }
        ));
        assert!(matches!(
            FormSource::pick(None, None, true, ".md"),
            FormSource::Args { .. }
        ));
        assert!(matches!(
            FormSource::pick(Some("t".into()), None, false, ".md"),
            FormSource::Args { .. }
        ));
    }

    #[test]
    fn assume_yes_confirms() {
        let mut presenter = TerminalPresenter::new(ListOutput::Hidden).assume_yes(true);
        assert!(presenter.confirm("Delete?"));
    }
}
