//! Keyword parser turning a natural-language request into a plot command.
//!
//! A request is recognized as a plot request when it names a plot type; the
//! two columns are the tokens on either side of the separator word. The
//! heuristic can pick the wrong tokens when extra words crowd the separator;
//! that is a known limit of the command grammar, not something callers
//! should rely on.

use std::fmt;

use thiserror::Error;

/// Connector word between the two column names, as the dataset's users
/// write it ("TotalWaste dan Recycled").
pub const SEPARATOR: &str = "dan";

const PLOT_WORD: &str = "plot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Bar,
    Scatter,
}

impl PlotKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "scatter" => Some(Self::Scatter),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of a requested chart. Column names are canonical
/// header names from the dataset, whatever case the request used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotCommand {
    pub kind: PlotKind,
    pub x_column: String,
    pub y_column: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("plot request is missing '{}' between the two column names", SEPARATOR)]
    MissingSeparator,
    #[error("'{}' must sit between two column names, e.g. \"line plot TotalWaste {} Recycled\"", SEPARATOR, SEPARATOR)]
    SeparatorAtEdge,
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

/// Classify a request string. `Ok(None)` means the input is not a plot
/// request at all and belongs to the chat dispatcher; an error means it
/// looked like a plot request but cannot be honored, with a reason fit for
/// direct display.
pub fn parse_request(input: &str, columns: &[String]) -> Result<Option<PlotCommand>, ParseError> {
    let lowered = input.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let Some(kind) = detect_kind(&tokens) else {
        return Ok(None);
    };

    let sep = tokens
        .iter()
        .position(|t| *t == SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;
    if sep == 0 || sep + 1 == tokens.len() {
        return Err(ParseError::SeparatorAtEdge);
    }

    let x_column = resolve(tokens[sep - 1], columns)?;
    let y_column = resolve(tokens[sep + 1], columns)?;

    Ok(Some(PlotCommand { kind, x_column, y_column }))
}

/// The token right before the literal "plot" wins when it names a type;
/// otherwise the first plot-type token anywhere in the request.
fn detect_kind(tokens: &[&str]) -> Option<PlotKind> {
    if let Some(at) = tokens.iter().position(|t| *t == PLOT_WORD) {
        if at > 0 {
            if let Some(kind) = PlotKind::from_token(tokens[at - 1]) {
                return Some(kind);
            }
        }
    }
    tokens.iter().find_map(|t| PlotKind::from_token(t))
}

fn resolve(token: &str, columns: &[String]) -> Result<String, ParseError> {
    columns
        .iter()
        .find(|c| c.eq_ignore_ascii_case(token))
        .cloned()
        .ok_or_else(|| ParseError::UnknownColumn(token.to_string()))
}
