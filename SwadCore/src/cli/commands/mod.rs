//! CLI subcommands

pub mod action;
pub mod definitions;
pub mod dispatch;
pub mod execute;
pub mod question;
pub mod xml;

use std::path::PathBuf;

use clap::Subcommand;

pub use definitions::{ActionCommands, QuestionCommands, XmlCommands};

use crate::action::{ActionId, HierarchyLevel, Role};

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the action table (descriptors, codes, permissions, menus)
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },

    /// Parse and print XML files
    Xml {
        #[command(subcommand)]
        command: XmlCommands,
    },

    /// Import, validate, export and list test questions
    Question {
        #[command(subcommand)]
        command: QuestionCommands,
    },

    /// Simulate a request and print the response
    Dispatch {
        /// Action name (SeeCty, ActSeeCty) or persisted code (862)
        action: String,

        /// Acting role (name or abbreviation)
        #[arg(short, long, default_value = "guest")]
        role: Role,

        /// Scope of the request
        #[arg(short, long, default_value = "system")]
        level: HierarchyLevel,

        /// The user is not enrolled in the scope
        #[arg(long)]
        not_member: bool,

        /// Request parameter as name=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// File to send as the uploaded file
        #[arg(long)]
        upload: Option<PathBuf>,

        /// MIME type reported for the upload
        #[arg(long, default_value = "text/xml")]
        mime: String,

        /// Question bank file (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Write the response body here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse `name=value`.
fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}

/// Accept an action name or a persisted code.
pub(crate) fn parse_action(s: &str) -> anyhow::Result<ActionId> {
    match s.parse::<i64>() {
        Ok(code) => Ok(crate::action::resolve_legacy_code(code)),
        Err(_) => Ok(s.parse::<ActionId>()?),
    }
}
