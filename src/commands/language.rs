use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::console::Console;
use crate::consts::LANGUAGES;

pub struct LanguageCommand;

#[async_trait]
impl Command for LanguageCommand {
    fn name(&self) -> &str {
        "/language"
    }

    fn aliases(&self) -> &[&str] {
        &["/lang"]
    }

    fn description(&self) -> &str {
        "set the language, or list choices with no argument"
    }

    async fn execute(&self, args: &str, console: &mut Console) -> CommandResult {
        if args.is_empty() {
            let current = console.form().language();
            for language in LANGUAGES {
                let marker = if *language == current { " ← current" } else { "" };
                println!("  {language}{marker}");
            }
            if !current.is_empty() && !LANGUAGES.contains(&current) {
                println!("  {current} ← current");
            }
            return CommandResult::Handled;
        }

        console.form_mut().set_language(args);
        println!("  ✓ language set to {}", console.form().language());
        CommandResult::Handled
    }
}
