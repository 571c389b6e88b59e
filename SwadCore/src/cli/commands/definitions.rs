//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

use crate::action::{HierarchyLevel, Role, Tab};

/// Action table commands
#[derive(Subcommand)]
pub enum ActionCommands {
    /// Show the descriptor of an action
    Show {
        /// Action name (SeeCty, ActSeeCty) or persisted code (862)
        action: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List actions, optionally only those of one tab
    List {
        /// Only actions of this tab
        #[arg(short, long)]
        tab: Option<Tab>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Resolve persisted codes to actions
    Resolve {
        /// Codes read from logs or bookmarks
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i64>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check whether a role may run an action
    Check {
        /// Action name or persisted code
        action: String,

        /// Acting role (name or abbreviation)
        #[arg(short, long)]
        role: Role,

        /// Scope of the request
        #[arg(short, long, default_value = "course")]
        level: HierarchyLevel,

        /// The user is not enrolled in the scope
        #[arg(long)]
        not_member: bool,
    },

    /// Print the menu of a tab as a role sees it
    Menu {
        /// Tab to render
        tab: Tab,

        /// Acting role
        #[arg(short, long)]
        role: Role,

        /// Scope of the request
        #[arg(short, long, default_value = "course")]
        level: HierarchyLevel,

        /// The user is not enrolled in the scope
        #[arg(long)]
        not_member: bool,

        /// Action being run, marks its menu option as selected
        #[arg(short, long)]
        current: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// XML commands
#[derive(Subcommand)]
pub enum XmlCommands {
    /// Parse a file and print its element tree
    Print {
        /// XML file
        source: PathBuf,

        /// Escape the printout for embedding in HTML
        #[arg(long)]
        html: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Test question commands
#[derive(Subcommand)]
pub enum QuestionCommands {
    /// Import a question file into the bank
    Import {
        /// Question file
        source: PathBuf,

        /// Question bank file (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Read and validate without saving the bank
        #[arg(long)]
        dry_run: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate question files without importing them
    Validate {
        /// Question files or directories (searched recursively)
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Suppress progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Export the bank to a question file
    Export {
        /// Output file
        destination: PathBuf,

        /// Question bank file (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Only questions with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Author written in the file credits (defaults to the configured author)
        #[arg(short, long)]
        author: Option<String>,
    },

    /// List the questions in the bank
    List {
        /// Question bank file (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Only questions with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
