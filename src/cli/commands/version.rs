//! Version command implementation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints `Linux Wave CLI v<version>`.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("Linux Wave CLI v{}", crate::version()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_version_banner() {
        let mut ui = MockUI::new();

        let result = VersionCommand.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["Linux Wave CLI v0.1.0".to_string()]);
    }
}
