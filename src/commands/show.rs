use async_trait::async_trait;
use std::io::IsTerminal;

use super::{Command, CommandResult};
use crate::console::Console;
use crate::console::render::{render_form, render_status};

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn description(&self) -> &str {
        "print the form: language, code, and last result"
    }

    async fn execute(&self, _args: &str, console: &mut Console) -> CommandResult {
        let colored = std::io::stdout().is_terminal();
        let form = console.form();

        println!("{}", render_form(form, colored));
        if !form.code().is_empty() {
            println!();
            for (i, line) in form.code().lines().enumerate() {
                println!("  {:>4} │ {}", i + 1, line);
            }
        }
        let status = render_status(form, colored);
        if !status.is_empty() {
            println!("\n{status}");
        }
        CommandResult::Handled
    }
}
