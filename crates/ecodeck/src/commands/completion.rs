use clap::CommandFactory;

use crate::cli::{Cli, Shell};

pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(to_clap_shell(shell), &mut cmd, "ecodeck", &mut std::io::stdout());
}

fn to_clap_shell(shell: Shell) -> clap_complete::Shell {
    match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Powershell => clap_complete::Shell::PowerShell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_script_mentions_subcommands() {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        clap_complete::generate(to_clap_shell(Shell::Bash), &mut cmd, "ecodeck", &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("ecodeck"));
        assert!(script.contains("list"));
        assert!(script.contains("--autoplay"));
    }
}
