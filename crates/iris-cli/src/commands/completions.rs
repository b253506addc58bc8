//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell as Target, generate};

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();

    generate(
        target(args.shell),
        &mut cmd,
        bin_name,
        &mut std::io::stdout(),
    );
    Ok(())
}

fn target(shell: Shell) -> Target {
    match shell {
        Shell::Bash => Target::Bash,
        Shell::Zsh => Target::Zsh,
        Shell::Fish => Target::Fish,
        Shell::PowerShell => Target::PowerShell,
        Shell::Elvish => Target::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_use_binary_name() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(target(Shell::Bash), &mut cmd, "iris", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("iris"));
        assert!(script.contains("seed"));
    }
}
