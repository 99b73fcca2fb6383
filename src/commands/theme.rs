use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::console::Console;

pub struct ThemeCommand;

#[async_trait]
impl Command for ThemeCommand {
    fn name(&self) -> &str {
        "/theme"
    }

    fn description(&self) -> &str {
        "toggle light/dark colours"
    }

    async fn execute(&self, _args: &str, console: &mut Console) -> CommandResult {
        let theme = console.toggle_theme();
        println!("  ✓ {} theme", theme.label());
        CommandResult::Handled
    }
}
