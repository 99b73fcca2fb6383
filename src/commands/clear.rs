use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::console::Console;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "empty the code buffer"
    }

    async fn execute(&self, _args: &str, console: &mut Console) -> CommandResult {
        console.form_mut().clear_code();
        println!("  ✓ code cleared");
        CommandResult::Handled
    }
}
