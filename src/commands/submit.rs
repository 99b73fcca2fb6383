use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::console::Console;

pub struct SubmitCommand;

#[async_trait]
impl Command for SubmitCommand {
    fn name(&self) -> &str {
        "/submit"
    }

    fn aliases(&self) -> &[&str] {
        &["/s", "/review"]
    }

    fn description(&self) -> &str {
        "send the code for review"
    }

    async fn execute(&self, _args: &str, _console: &mut Console) -> CommandResult {
        // the REPL owns the spinner, so it runs the cycle
        CommandResult::Submit
    }
}
