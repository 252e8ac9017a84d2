use crate::error::{MindzError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(MindzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| MindzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(MindzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(MindzError::Io)
}

/// Opens the editor on a buffer seeded with a topic's current text and
/// returns the committed text.
///
/// `None` means the edit was cancelled: the user emptied the buffer,
/// so the caller must leave the topic's text untouched. The buffer is
/// throwaway — it never reaches the store.
pub fn edit_text(initial: &str) -> Result<Option<String>> {
    let temp_file = env::temp_dir().join("mindz_edit.txt");

    fs::write(&temp_file, format!("{}\n", initial)).map_err(MindzError::Io)?;
    let result = open_in_editor(&temp_file)?;
    let _ = fs::remove_file(&temp_file);

    Ok(parse_buffer(&result))
}

/// The first non-blank line of the buffer is the committed text.
pub fn parse_buffer(buffer: &str) -> Option<String> {
    buffer
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}
