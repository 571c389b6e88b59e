//! Command execution implementations

use super::Commands;
use super::definitions::{ActionCommands, QuestionCommands, XmlCommands};
use super::{action, dispatch, question, xml};
use crate::action::Membership;
use crate::config::Config;

fn membership(not_member: bool) -> Membership {
    if not_member {
        Membership::DontBelong
    } else {
        Membership::Belong
    }
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            Commands::Action { command } => command.execute(),
            Commands::Xml { command } => command.execute(),
            Commands::Question { command } => command.execute(config),
            Commands::Dispatch {
                action,
                role,
                level,
                not_member,
                params,
                upload,
                mime,
                bank,
                output,
            } => dispatch::execute(
                config,
                &dispatch::Request {
                    action,
                    role: *role,
                    level: *level,
                    membership: membership(*not_member),
                    params,
                    upload: upload.as_deref(),
                    mime,
                },
                bank.as_deref(),
                output.as_deref(),
            ),
        }
    }
}

impl ActionCommands {
    /// Execute the selected action table command.
    ///
    /// # Errors
    /// Returns an error if an action name or code cannot be read.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ActionCommands::Show { action, format } => action::show(action, format),
            ActionCommands::List { tab, format } => action::list(*tab, format),
            ActionCommands::Resolve { codes, format } => action::resolve(codes, format),
            ActionCommands::Check {
                action,
                role,
                level,
                not_member,
            } => action::check(action, *role, *level, membership(*not_member)),
            ActionCommands::Menu {
                tab,
                role,
                level,
                not_member,
                current,
                format,
            } => action::menu(
                *tab,
                *role,
                *level,
                membership(*not_member),
                current.as_deref(),
                format,
            ),
        }
    }
}

impl XmlCommands {
    /// Execute the selected XML command.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            XmlCommands::Print {
                source,
                html,
                format,
            } => xml::print(source, *html, format),
        }
    }
}

impl QuestionCommands {
    /// Execute the selected question command.
    ///
    /// # Errors
    /// Returns an error if a file or the bank cannot be read or written.
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            QuestionCommands::Import {
                source,
                bank,
                dry_run,
                format,
            } => question::import(config, source, bank.as_deref(), *dry_run, format),
            QuestionCommands::Validate {
                sources,
                format,
                no_progress,
            } => question::validate(config, sources, format, *no_progress),
            QuestionCommands::Export {
                destination,
                bank,
                tag,
                author,
            } => question::export(
                config,
                destination,
                bank.as_deref(),
                tag.as_deref(),
                author.as_deref(),
            ),
            QuestionCommands::List { bank, tag, format } => {
                question::list(config, bank.as_deref(), tag.as_deref(), format)
            }
        }
    }
}
