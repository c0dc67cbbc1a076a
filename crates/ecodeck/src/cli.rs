use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::app::LaunchOptions;
use crate::config::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::render::transition::TransitionKind;

#[derive(Parser)]
#[command(name = "ecodeck")]
#[command(author, version, about)]
#[command(long_about = "Eco Vibe Bottles investor deck.\n\n\
    A twelve-slide pitch that advances on its own or on demand.\n\n\
    Examples:\n  \
    ecodeck                      Present fullscreen\n  \
    ecodeck --windowed --autoplay  Present in a window with auto-play on\n  \
    ecodeck --slide 5            Open on slide 5\n  \
    ecodeck list                 Print the slide outline")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed, clamped to the deck)
    #[arg(long, value_name = "N")]
    pub slide: Option<usize>,

    /// Start with auto-play on
    #[arg(long, overrides_with = "no_autoplay")]
    pub autoplay: bool,

    /// Start with auto-play off, even if the config enables it
    #[arg(long, overrides_with = "autoplay")]
    pub no_autoplay: bool,

    /// Seconds between auto-play advances
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS)
    )]
    pub interval: Option<u64>,

    /// Slide transition style
    #[arg(long, value_enum)]
    pub transition: Option<TransitionArg>,

    /// Never download slide images; show their descriptions instead
    #[arg(long)]
    pub offline: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors: lowers logging and silences confirmations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slide outline
    List {
        /// Print the full slide data as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.autoplay, defaults.interval)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum TransitionArg {
    Slide,
    Fade,
    None,
}

impl From<TransitionArg> for TransitionKind {
    fn from(arg: TransitionArg) -> Self {
        match arg {
            TransitionArg::Slide => TransitionKind::Slide,
            TransitionArg::Fade => TransitionKind::Fade,
            TransitionArg::None => TransitionKind::None,
        }
    }
}

impl Cli {
    /// Presentation flags, with unset ones left to the config.
    pub fn launch_options(&self) -> LaunchOptions {
        let autoplay = match (self.autoplay, self.no_autoplay) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        LaunchOptions {
            windowed: self.windowed,
            slide: self.slide,
            autoplay,
            interval: self.interval,
            transition: self.transition.map(TransitionKind::from),
            offline: self.offline,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::List { json }) => crate::commands::list::run(json),
            Some(Commands::Config { command }) => {
                crate::commands::config::run(command, self.quiet)
            }
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                let options = self.launch_options();
                let deck = crate::deck::Deck::builtin()?;
                let config = crate::config::Config::load_or_default();
                crate::app::run(deck, options, config.defaults)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ecodeck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_presents_with_config_defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        let options = cli.launch_options();
        assert!(!options.windowed);
        assert_eq!(options.slide, None);
        assert_eq!(options.autoplay, None);
        assert_eq!(options.interval, None);
        assert_eq!(options.transition, None);
    }

    #[test]
    fn test_presentation_flags() {
        let options = parse(&[
            "--windowed",
            "--slide",
            "5",
            "--autoplay",
            "--interval",
            "10",
            "--transition",
            "fade",
            "--offline",
        ])
        .launch_options();
        assert!(options.windowed);
        assert_eq!(options.slide, Some(5));
        assert_eq!(options.autoplay, Some(true));
        assert_eq!(options.interval, Some(10));
        assert_eq!(options.transition, Some(TransitionKind::Fade));
        assert!(options.offline);
    }

    #[test]
    fn test_last_autoplay_flag_wins() {
        assert_eq!(
            parse(&["--autoplay", "--no-autoplay"]).launch_options().autoplay,
            Some(false)
        );
        assert_eq!(
            parse(&["--no-autoplay", "--autoplay"]).launch_options().autoplay,
            Some(true)
        );
    }

    #[test]
    fn test_interval_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["ecodeck", "--interval", "0"]).is_err());
        assert!(Cli::try_parse_from(["ecodeck", "--interval", "601"]).is_err());
        assert!(Cli::try_parse_from(["ecodeck", "--interval", "600"]).is_ok());
    }

    #[test]
    fn test_subcommands() {
        assert!(matches!(
            parse(&["list", "--json"]).command,
            Some(Commands::List { json: true })
        ));
        assert!(matches!(
            parse(&["config", "set", "defaults.interval", "9"]).command,
            Some(Commands::Config {
                command: ConfigCommands::Set { .. }
            })
        ));
        assert!(matches!(
            parse(&["completion", "zsh"]).command,
            Some(Commands::Completion { shell: Shell::Zsh })
        ));
        assert!(matches!(parse(&["version"]).command, Some(Commands::Version)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["list", "-vv", "--no-color"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_quiet_applies_to_subcommands() {
        let cli = parse(&["config", "set", "defaults.autoplay", "true", "-q"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_presentation_flags_conflict_with_subcommands() {
        assert!(Cli::try_parse_from(["ecodeck", "--windowed", "list"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
