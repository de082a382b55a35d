use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tickpad::model::{Tab, Theme};

#[derive(Parser, Debug)]
#[command(name = "tickpad", bin_name = "tickpad", version)]
#[command(about = "A small to-do list and notes pad", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active list
    #[command(alias = "ls")]
    List {
        /// Only show items containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Add a note
    Note {
        /// Note content (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Mark a task done, or open again
    #[command(alias = "done")]
    Toggle {
        /// Task number as shown by `list`
        index: usize,
    },

    /// Delete an item from the active list
    #[command(alias = "delete")]
    Rm {
        /// Item number as shown by `list`
        index: usize,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Switch the active list
    Tab {
        #[arg(value_parser = parse_tab)]
        tab: Tab,
    },

    /// Set the theme, or toggle it when no theme is given
    Theme {
        #[arg(value_parser = parse_theme)]
        theme: Option<Theme>,
    },

    /// Filter the active list
    Search {
        #[arg(required = true, trailing_var_arg = true)]
        term: Vec<String>,
    },

    /// Export the widget as a standalone HTML page
    Html {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or set configuration
    Config {
        /// Configuration key (confirm-delete, line-width, page-title)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    s.parse().map_err(|e: tickpad::error::TickpadError| e.to_string())
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse().map_err(|e: tickpad::error::TickpadError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tickpad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_words() {
        match parse(&["add", "Buy", "milk"]).command {
            Some(Commands::Add { text }) => assert_eq!(text.join(" "), "Buy milk"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(parse(&["ls"]).command, Some(Commands::List { search: None })));
        assert!(matches!(parse(&["done", "2"]).command, Some(Commands::Toggle { index: 2 })));
        assert!(matches!(
            parse(&["delete", "1", "--yes"]).command,
            Some(Commands::Rm { index: 1, yes: true })
        ));
    }

    #[test]
    fn tab_and_theme_values_are_typed() {
        assert!(matches!(parse(&["tab", "notes"]).command, Some(Commands::Tab { tab: Tab::Notes })));
        assert!(matches!(
            parse(&["theme", "dark"]).command,
            Some(Commands::Theme { theme: Some(Theme::Dark) })
        ));
        assert!(matches!(parse(&["theme"]).command, Some(Commands::Theme { theme: None })));
        assert!(Cli::try_parse_from(["tickpad", "tab", "calendar"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["list", "-v", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
