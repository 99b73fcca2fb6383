//! Console commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and dynamic help generation. Anything that isn't a command is code.

mod clear;
mod file;
mod language;
mod quit;
mod show;
mod submit;
mod theme;

use async_trait::async_trait;
use std::sync::Arc;

use crate::console::Console;

/// What the REPL should do after a line is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command, the line belongs to the code buffer.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Run a submit cycle.
    Submit,
    /// Exit the REPL.
    Quit,
}

/// A console command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/submit"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/s"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is whatever followed the name, trimmed.
    async fn execute(&self, args: &str, console: &mut Console) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(HelpCommand),
            Arc::new(language::LanguageCommand),
            Arc::new(file::FileCommand),
            Arc::new(show::ShowCommand),
            Arc::new(clear::ClearCommand),
            Arc::new(theme::ThemeCommand),
            Arc::new(submit::SubmitCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch a line to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, console: &mut Console) -> CommandResult {
        let line = input.trim();
        let (cmd, args) = match line.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (line, ""),
        };

        for command in &self.commands {
            let mut triggers =
                std::iter::once(command.name()).chain(command.aliases().iter().copied());
            if triggers.any(|trigger| is_triggered(trigger, cmd, line)) {
                // /help needs the registry itself to list commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, console).await;
            }
        }

        if looks_like_command(cmd) {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out.push_str("\n  any other line is appended to the code\n");
        out
    }

    /// All registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases.
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Slash triggers match the first word. Bare words like `exit` only match
/// a line on their own, so `exit 1` stays code.
fn is_triggered(trigger: &str, cmd: &str, line: &str) -> bool {
    if trigger.starts_with('/') {
        trigger == cmd
    } else {
        trigger == line
    }
}

/// A leading `/` followed by a letter or `?`, with no further `/`.
/// Leaves comments, paths and regex literals to the code buffer.
fn looks_like_command(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('/') else {
        return false;
    };
    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '?')
        && !rest.contains('/')
}

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _console: &mut Console) -> CommandResult {
        // dispatched by the registry
        CommandResult::Handled
    }
}
