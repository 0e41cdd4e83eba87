//! Shell completion generation command

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::commands::DigiletsCli;
use crate::error::CliResult;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub async fn execute(self) -> CliResult<()> {
        let mut cmd = DigiletsCli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }
}
