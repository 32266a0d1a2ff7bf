//! Line commands read from stdin.

use std::time::Duration;

use ninjadom::Event;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver an input event.
    Input(Event),
    /// Show a snackbar message directly.
    Show(String),
    /// Select a tab programmatically.
    Select { container: String, index: usize },
    /// Advance the page clock without waiting.
    Wait(Duration),
    /// Print the document outline.
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

pub const HELP: &str = "\
commands:
  click <id>            click an element
  outside               click outside every element
  enter <id>            pointer enters an element
  leave <id>            pointer leaves an element
  show [message]        show a snackbar message
  tab <container> <n>   select tab n
  wait <ms>             advance the clock
  dump                  print the page
  quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "" => return Ok(None),
            "click" => Self::Input(Event::click(arg(rest, "click", "an element id")?)),
            "outside" => Self::Input(Event::click_outside()),
            "enter" => Self::Input(Event::pointer_enter(arg(rest, "enter", "an element id")?)),
            "leave" => Self::Input(Event::pointer_leave(arg(rest, "leave", "an element id")?)),
            "show" => Self::Show(rest.to_string()),
            "tab" => {
                let (container, index) = rest.split_once(' ').ok_or(ParseError::MissingArgument {
                    command: "tab",
                    expected: "a container id and an index",
                })?;
                Self::Select {
                    container: container.to_string(),
                    index: number(index.trim())?,
                }
            }
            "wait" => Self::Wait(Duration::from_millis(number(arg(
                rest,
                "wait",
                "a duration in milliseconds",
            )?)?)),
            "dump" => Self::Dump,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn arg<'a>(rest: &'a str, command: &'static str, expected: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, ParseError> {
    text.parse()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}
