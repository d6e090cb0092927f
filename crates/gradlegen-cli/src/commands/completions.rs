//! `gradlegen completions` — shell completion generation.

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct CompletionsCmd {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn execute(cmd: CompletionsCmd) -> CliResult<()> {
    let mut command = crate::cli::Cli::command();
    clap_complete::generate(cmd.shell, &mut command, "gradlegen", &mut std::io::stdout());
    Ok(())
}
