//! Checkers Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::io;
use std::result;

/// Checkers Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for Checkers engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A cell code outside of 0..=4 was found in a position matrix.
    InvalidCellCode,
    /// Layout string does not describe an 8x8 board.
    LayoutMalformed,

    /// Square parse string malformed.
    ParseSquareMalformed,
    /// Move parse string malformed.
    ParseMoveMalformed,
    /// Side parse string malformed.
    ParseSideMalformed,

    /// Command line received no command string.
    CommandNoCommand,
    /// Command line received an unknown command.
    CommandUnknown,
    /// An argument was expected following a command, but none was provided.
    CommandNoArgument,
    /// Command failed to parse an integer argument.
    CommandCannotParseInt,

    /// Settings file could not be read.
    SettingsIo,
    /// Settings file is not valid settings json.
    SettingsMalformed,

    /// A move was given that is not legal in the current game position.
    GameIllegalMove,
    /// The game has already ended, no more moves can be played.
    GameOver,
    /// A bot was asked to move for a side played by a human, or in the middle of a capture chain.
    GameWrongPlayer,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCellCode => "invalid cell code",
            ErrorKind::LayoutMalformed => "layout malformed",

            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParseSideMalformed => "parse side malformed",

            ErrorKind::CommandNoCommand => "command no command",
            ErrorKind::CommandUnknown => "command unknown",
            ErrorKind::CommandNoArgument => "command no argument",
            ErrorKind::CommandCannotParseInt => "command cannot parse integer",

            ErrorKind::SettingsIo => "settings io",
            ErrorKind::SettingsMalformed => "settings malformed",

            ErrorKind::GameIllegalMove => "game illegal move",
            ErrorKind::GameOver => "game over",
            ErrorKind::GameWrongPlayer => "game wrong player",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Checkers Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Custom(ErrorKind::SettingsIo, error.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Custom(ErrorKind::SettingsMalformed, error.into())
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
