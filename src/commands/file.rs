use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::console::Console;

pub struct FileCommand;

#[async_trait]
impl Command for FileCommand {
    fn name(&self) -> &str {
        "/file"
    }

    fn description(&self) -> &str {
        "replace the code with a file's contents"
    }

    async fn execute(&self, args: &str, console: &mut Console) -> CommandResult {
        if args.is_empty() {
            eprintln!("  ✗ usage: /file <path>");
            return CommandResult::Handled;
        }

        match tokio::fs::read_to_string(args).await {
            Ok(code) => {
                let lines = code.lines().count();
                console.form_mut().set_code(code);
                println!("  ✓ loaded {lines} line(s) from {args}");
            }
            Err(e) => eprintln!("  ✗ failed to read {args}: {e}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_console;

    #[tokio::test]
    async fn loads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.py");
        std::fs::write(&path, "print('hi')\n").unwrap();

        let mut console = test_console();
        console.form_mut().set_code("old");
        FileCommand
            .execute(path.to_str().unwrap(), &mut console)
            .await;

        assert_eq!(console.form().code(), "print('hi')\n");
    }

    #[tokio::test]
    async fn missing_file_keeps_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.py");

        let mut console = test_console();
        console.form_mut().set_code("old");
        assert_eq!(
            FileCommand.execute(path.to_str().unwrap(), &mut console).await,
            CommandResult::Handled
        );
        assert_eq!(console.form().code(), "old");
    }

    #[tokio::test]
    async fn no_path_is_handled() {
        let mut console = test_console();
        assert_eq!(
            FileCommand.execute("", &mut console).await,
            CommandResult::Handled
        );
    }
}
