use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Shell};

/// Run the `completion` command: write a completion script to stdout.
pub fn run(shell: Shell) {
    let target = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Powershell => clap_complete::Shell::PowerShell,
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(target, &mut cmd, name, &mut std::io::stdout());
}
