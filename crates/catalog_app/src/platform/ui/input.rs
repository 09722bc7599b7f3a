//! Search, filter and paging controls: one command per stdin line.

use catalog_core::{AppViewModel, Msg, PageControl};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  search <text>   search the catalog (blank clears the term)
  genre <id>      filter by genre id (blank clears the filter)
  genres          list genre ids
  page <n>        jump to page n
  next | prev     step one page
  select <n>      open row n in the detail view
  back            close the detail view
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    Filter(String),
    Page(u32),
    Next,
    Previous,
    Select(usize),
    Back,
    Genres,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("`{command}` expects a positive number, got `{value}`")]
    NotANumber { command: &'static str, value: String },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_intent(line: &str) -> Result<Option<Intent>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let intent = match command.to_ascii_lowercase().as_str() {
        "search" | "s" => Intent::Search(rest.to_string()),
        "genre" | "g" => Intent::Filter(rest.to_string()),
        "genres" => Intent::Genres,
        "page" | "p" => Intent::Page(parse_number("page", rest)?),
        "next" | "n" => Intent::Next,
        "prev" | "previous" => Intent::Previous,
        "select" | "open" => Intent::Select(parse_number("select", rest)? as usize),
        "back" | "b" => Intent::Back,
        "help" | "?" => Intent::Help,
        "quit" | "q" | "exit" => Intent::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(intent))
}

fn parse_number(command: &'static str, value: &str) -> Result<u32, InputError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| InputError::NotANumber {
            command,
            value: value.to_string(),
        })
}

/// Turns an intent into a coordinator message against what is on screen.
///
/// Returns `None` for intents the event loop handles itself and for clicks on
/// disabled controls.
pub fn resolve(intent: Intent, view: &AppViewModel) -> Option<Msg> {
    match intent {
        Intent::Search(term) => Some(Msg::SearchSubmitted(term)),
        Intent::Filter(value) => Some(Msg::FilterChanged {
            kind: "genre".to_string(),
            value,
        }),
        Intent::Page(page) => page.checked_sub(1).map(|selected| Msg::PageSelected {
            selected: selected as usize,
        }),
        Intent::Next => arrow_target(view, |c| matches!(c, PageControl::Next { .. })),
        Intent::Previous => arrow_target(view, |c| matches!(c, PageControl::Previous { .. })),
        Intent::Select(row) => row
            .checked_sub(1)
            .and_then(|index| view.rows.get(index))
            .map(|row| Msg::ItemSelected {
                item_id: row.item_id,
            }),
        Intent::Back => view.detail.as_ref().map(|_| Msg::DetailClosed),
        Intent::Genres | Intent::Help | Intent::Quit => None,
    }
}

fn arrow_target(view: &AppViewModel, is_arrow: impl Fn(&PageControl) -> bool) -> Option<Msg> {
    let pagination = view.pagination.as_ref()?;
    let control = pagination.controls.iter().find(|c| is_arrow(c))?;
    control
        .target()
        .map(|selected| Msg::PageSelected { selected })
}
