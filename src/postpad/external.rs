//! `$EDITOR` integration.
//!
//! The terminal client uses the user's editor as the editor panel: the form is
//! written to a temporary file as
//!
//! ```text
//! Title
//!
//! Content...
//! ```
//!
//! and read back when the editor exits.

use crate::editor::EditorForm;
use crate::error::{PostpadError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;
use uuid::Uuid;

/// Formats the form for the editor buffer: `title\n\ncontent`.
pub fn to_buffer(form: &EditorForm) -> String {
    if form.content.is_empty() {
        format!("{}\n\n", form.title)
    } else {
        format!("{}\n\n{}", form.title, form.content)
    }
}

/// Parses an editor buffer: first non-blank line is the title, the rest
/// (minus surrounding blank lines) is the content.
pub fn from_buffer(buffer: &str) -> EditorForm {
    let mut lines = buffer.lines().skip_while(|l| l.trim().is_empty());
    let title = lines.next().unwrap_or_default().trim().to_string();
    let rest: Vec<&str> = lines.collect();
    let content = rest.join("\n").trim().to_string();
    EditorForm { title, content }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        let found = Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Ok(fallback.to_string());
        }
    }

    Err(PostpadError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PostpadError::Editor("Empty editor command".to_string()))?;

    debug!(editor = %editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| PostpadError::Editor(format!("Failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PostpadError::Editor(format!(
            "'{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(PostpadError::Io)
}

/// Opens the editor on `initial` and returns what the user saved.
pub fn edit_form(initial: &EditorForm, file_ext: &str) -> Result<EditorForm> {
    let temp_file = env::temp_dir().join(format!("postpad-{}{}", Uuid::new_v4(), file_ext));
    fs::write(&temp_file, to_buffer(initial)).map_err(PostpadError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(from_buffer(&edited?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_with_content() {
        let form = EditorForm::new("My Title", "Some content here.");
        assert_eq!(to_buffer(&form), "My Title\n\nSome content here.");
    }

    #[test]
    fn buffer_without_content() {
        assert_eq!(to_buffer(&EditorForm::new("My Title", "")), "My Title\n\n");
    }

    #[test]
    fn parses_title_and_multiline_content() {
        let form = from_buffer("My Title\n\nThis is content.\nMore content.\n");
        assert_eq!(form, EditorForm::new("My Title", "This is content.\nMore content."));
    }

    #[test]
    fn parses_without_blank_separator() {
        let form = from_buffer("Title\nContent without blank");
        assert_eq!(form, EditorForm::new("Title", "Content without blank"));
    }

    #[test]
    fn skips_leading_blank_lines() {
        let form = from_buffer("\n\n  Title  \n\nBody");
        assert_eq!(form, EditorForm::new("Title", "Body"));
    }

    #[test]
    fn empty_buffer_gives_empty_form() {
        assert_eq!(from_buffer(""), EditorForm::default());
        assert_eq!(from_buffer("\n \n"), EditorForm::default());
    }

    #[test]
    fn roundtrip() {
        let original = EditorForm::new("Test Title", "Test content\nwith lines");
        assert_eq!(from_buffer(&to_buffer(&original)), original);
    }
}
