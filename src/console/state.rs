//! The form the console edits between submissions.

use anyhow::Result;

use crate::consts::{CLIENT_FAILURE_MESSAGE, LANGUAGES, VALIDATION_MESSAGE};
use crate::protocol::ReviewRequest;

/// Colour palette for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// What the form is showing below the inputs. Feedback and error are
/// never shown together, and neither is shown while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Feedback(String),
    Error(String),
}

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Send this to the gateway. The form is now loading.
    Ready(ReviewRequest),
    /// Code or language missing; the validation error is set.
    Invalid,
    /// A request is already in flight; nothing changed.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    code: String,
    language: String,
    status: Status,
    theme: Theme,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn feedback(&self) -> Option<&str> {
        match &self.status {
            Status::Feedback(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Append one line to the code buffer, as if typed into the editor.
    pub fn push_code_line(&mut self, line: &str) {
        if !self.code.is_empty() {
            self.code.push('\n');
        }
        self.code.push_str(line);
    }

    pub fn clear_code(&mut self) {
        self.code.clear();
    }

    /// Set the language label. Known languages are matched
    /// case-insensitively and stored with their canonical spelling.
    pub fn set_language(&mut self, language: &str) {
        let language = language.trim();
        self.language = LANGUAGES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(language))
            .map(|known| known.to_string())
            .unwrap_or_else(|| language.to_string());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Validate and, if the form is complete, enter the loading state.
    ///
    /// Blank (whitespace-only) code or language is treated as missing.
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_loading() {
            return Submission::Busy;
        }

        if self.code.trim().is_empty() || self.language.trim().is_empty() {
            self.status = Status::Error(VALIDATION_MESSAGE.to_string());
            return Submission::Invalid;
        }

        self.status = Status::Loading;
        Submission::Ready(ReviewRequest {
            code: self.code.clone(),
            language: self.language.clone(),
        })
    }

    /// Leave the loading state with the gateway's outcome. Failure detail
    /// is dropped; the form only ever shows the generic message.
    pub fn resolve(&mut self, outcome: Result<String>) {
        self.status = match outcome {
            Ok(feedback) => Status::Feedback(feedback),
            Err(_) => Status::Error(CLIENT_FAILURE_MESSAGE.to_string()),
        };
    }
}
