//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coldmail")]
#[command(version, about = "Browse prospects, generate cold emails and review them", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./coldmail.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides config and BACKEND_URL
    #[arg(short, long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive prospect page (default)
    Browse,

    /// Print the selectable prospects
    List,

    /// Print the formatted sections of one prospect
    Show {
        /// Prospect id
        id: String,

        /// Emit HTML markup instead of terminal text
        #[arg(long)]
        html: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_is_the_default() {
        let cli = Cli::try_parse_from(["coldmail"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_show_with_overrides() {
        let cli = Cli::try_parse_from([
            "coldmail",
            "--backend-url",
            "http://leads:8000",
            "-v",
            "show",
            "abc",
            "--html",
        ])
        .unwrap();

        assert_eq!(cli.backend_url.as_deref(), Some("http://leads:8000"));
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                id: "abc".into(),
                html: true
            })
        );
    }
}
