use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write shell completions for `lanes` to stdout.
pub fn execute(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}
