//! Shared UI primitives
//!
//! Conventions:
//! - Prompt: a bare `> ` with no decoration
//! - Feedback: printed as returned by the command, untouched
//! - Errors and warnings go to stderr with an `Error: ` / `Warning: ` prefix

use anyhow::Result;
use inquire::{ui::RenderConfig, InquireError, Text};

pub const PROMPT: &str = ">";

/// Truncate a string to max_chars, adding ellipsis if needed.
/// Result will be at most max_chars characters (including ellipsis if truncated).
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", kept.trim_end())
}

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Read one command line. Returns `None` when the user cancels (Esc, Ctrl+C, Ctrl+D).
pub fn read_command_line() -> Result<Option<String>> {
    let result = Text::new(PROMPT)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(line) => Ok(Some(line)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
