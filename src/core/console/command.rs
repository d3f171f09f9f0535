//! Console command parsing.
//!
//! Plain text is a search term. Everything else starts with `:`.

use thiserror::Error;

use crate::domains::resources::{ResourceError, ResourceId, parse_id};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Page(u32),
    Size(u32),
    Delete(ResourceId),
    Confirm,
    Cancel,
    View(ResourceId),
    Edit(ResourceId),
    Create,
    Go(String),
    Refresh,
    Help,
    Quit,
}

/// Errors that can occur while parsing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try :help)")]
    Unknown(String),

    #[error("{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

pub const HELP: &str = "\
text          search
:page N       go to page N
:size N       page size (10, 20 or 50)
:delete ID    stage a record for deletion
:confirm      delete the staged record
:cancel       keep the staged record
:view ID      show one record
:edit ID      open the edit page
:create       open the create page
:go PATH      open a console path, e.g. /doctors/view/3
:refresh      reload the current page
:help         this text
:quit         exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Search(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name {
            "page" | "p" => Self::Page(number(require(arg, ":page", "a page number")?)?),
            "size" => Self::Size(number(require(arg, ":size", "10, 20 or 50")?)?),
            "delete" | "rm" => Self::Delete(parse_id(require(arg, ":delete", "a record id")?)?),
            "confirm" | "y" => Self::Confirm,
            "cancel" | "n" => Self::Cancel,
            "view" => Self::View(parse_id(require(arg, ":view", "a record id")?)?),
            "edit" => Self::Edit(parse_id(require(arg, ":edit", "a record id")?)?),
            "create" | "new" => Self::Create,
            "go" => Self::Go(require(arg, ":go", "a path")?.to_string()),
            "refresh" | "r" => Self::Refresh,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(format!(":{other}"))),
        };

        Ok(command)
    }
}

fn require<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

fn number(raw: &str) -> Result<u32, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(
            Command::parse("  tehran ").unwrap(),
            Command::Search("tehran".into())
        );
        assert_eq!(Command::parse("").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(":page 3").unwrap(), Command::Page(3));
        assert_eq!(Command::parse(":size 50").unwrap(), Command::Size(50));
        assert_eq!(Command::parse(":delete 12").unwrap(), Command::Delete(12));
        assert_eq!(Command::parse(":y").unwrap(), Command::Confirm);
        assert_eq!(Command::parse(":cancel").unwrap(), Command::Cancel);
        assert_eq!(Command::parse(":view 4").unwrap(), Command::View(4));
        assert_eq!(Command::parse(":edit 4").unwrap(), Command::Edit(4));
        assert_eq!(
            Command::parse(":go /doctors").unwrap(),
            Command::Go("/doctors".into())
        );
        assert_eq!(Command::parse(":q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse(":page"),
            Err(CommandError::MissingArgument { command: ":page", .. })
        ));
        assert!(matches!(
            Command::parse(":page two"),
            Err(CommandError::InvalidNumber(_))
        ));
        assert!(matches!(
            Command::parse(":view x"),
            Err(CommandError::Resource(ResourceError::InvalidId(_)))
        ));
        assert!(matches!(
            Command::parse(":launch"),
            Err(CommandError::Unknown(name)) if name == ":launch"
        ));
    }
}
