//! Text rendering of the form for the terminal.

use super::state::{FormState, Status, Theme};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// ANSI colours per theme.
struct Palette {
    accent: &'static str,
    ok: &'static str,
    err: &'static str,
    muted: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            accent: "\x1b[34m",
            ok: "\x1b[32m",
            err: "\x1b[31m",
            muted: "\x1b[90m",
        },
        Theme::Dark => Palette {
            accent: "\x1b[94m",
            ok: "\x1b[92m",
            err: "\x1b[91m",
            muted: "\x1b[37m",
        },
    }
}

fn paint(text: &str, color: &str, colored: bool) -> String {
    if colored {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// One-line summary of the inputs.
pub fn render_form(form: &FormState, colored: bool) -> String {
    let p = palette(form.theme());
    let language = if form.language().is_empty() {
        "(none)"
    } else {
        form.language()
    };
    let lines = if form.code().is_empty() {
        0
    } else {
        form.code().lines().count()
    };
    format!(
        "  {} {}   {} {} line(s)   {} {}",
        paint("language", p.muted, colored),
        language,
        paint("code", p.muted, colored),
        lines,
        paint("theme", p.muted, colored),
        form.theme().label(),
    )
}

/// The panel shown under the form: spinner text, error, or feedback.
/// Empty when idle or when the feedback itself is empty.
pub fn render_status(form: &FormState, colored: bool) -> String {
    let p = palette(form.theme());
    match form.status() {
        Status::Idle => String::new(),
        Status::Loading => paint("Analyzing...", p.accent, colored),
        Status::Error(message) => paint(&format!("✗ {message}"), p.err, colored),
        Status::Feedback(text) if text.is_empty() => String::new(),
        Status::Feedback(text) => {
            let header = if colored {
                format!("{BOLD}{}✓ Feedback{RESET}", p.ok)
            } else {
                "✓ Feedback".to_string()
            };
            format!("{header}\n\n{text}")
        }
    }
}
