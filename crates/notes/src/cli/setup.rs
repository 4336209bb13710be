use clap::{ArgAction, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes", bin_name = "notes", version)]
#[command(about = "Take notes in an interactive terminal session", long_about = None)]
#[command(
    after_help = "Commands are read from stdin, one per line. Type `help` once the session starts."
)]
pub struct Cli {
    /// Config file [default: notes.toml in the platform config directory]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the example notes
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more (-v debug, -vv trace); NOTES_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A line typed on the list screen.
#[derive(Parser, Debug)]
#[command(multicall = true, color = ColorChoice::Never)]
pub struct ListLine {
    #[command(subcommand)]
    pub command: ListCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ListCommand {
    /// Show all notes
    #[command(alias = "ls")]
    List,

    /// Filter notes by text in title or content
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Write a new note
    #[command(alias = "n")]
    New,

    /// Edit a note
    #[command(alias = "e")]
    Edit { id: String },

    /// Delete a note
    #[command(alias = "rm")]
    Delete { id: String },

    /// End the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}

/// A line typed on the edit screen.
#[derive(Parser, Debug)]
#[command(multicall = true, color = ColorChoice::Never)]
pub struct EditLine {
    #[command(subcommand)]
    pub command: EditCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Set the title
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Replace the content
    Content {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Add a line to the content
    #[command(alias = "a")]
    Append {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show the draft
    Show,

    /// Save and go back to the list
    #[command(alias = "w")]
    Save,

    /// Delete this note and go back to the list
    Delete,

    /// Drop changes and go back to the list
    Cancel,

    /// End the session without saving
    #[command(aliases = ["q", "exit"])]
    Quit,
}

/// Parse one session line. The first word names the command.
pub fn parse_line<P: Parser>(line: &str) -> Result<P, clap::Error> {
    P::try_parse_from(line.split_whitespace())
}

/// The text after the command word, exactly as typed.
///
/// clap sees whitespace-split words; `words` is what it collected for the
/// text argument and only decides whether any text was given. Runs of spaces
/// inside the text are kept.
pub fn text_arg<'a>(line: &'a str, words: &[String]) -> &'a str {
    if words.is_empty() {
        return "";
    }
    match line.trim_start().split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim_start(),
        None => "",
    }
}
