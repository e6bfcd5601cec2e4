//! Error type for the interpreter, separating failures by the stage that raised them.
//!
//! Keeping parse/lookup/dispatch failures distinct lets callers react to user
//! mistakes without string matching, while still carrying the verbatim
//! user-visible text the language's scenarios pin down.

use std::fmt;

/// Something went wrong while parsing or running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScuttleError {
    /// The first one or two words of a line did not name a known verb.
    Parse(Vec<String>),
    /// A named object could not be found in the current inventory or any parent.
    Lookup(String),
    /// Neither side of `use X with Y` accepted the pairing.
    IncompatibleUse(String, String),
    /// A verb was applied to an operand lacking a capability it requires.
    Type(String),
    /// A shovel's return signal escaped every enclosing call-mode block.
    UncaughtReturn,
    /// Reading a source file or writing to a sink failed at the OS level.
    Io(String),
}

impl ScuttleError {
    pub(crate) fn lookup(name: &str) -> Self {
        Self::Lookup(name.to_owned())
    }

    pub(crate) fn incompatible_use(direct: &str, indirect: &str) -> Self {
        Self::IncompatibleUse(direct.to_owned(), indirect.to_owned())
    }

    pub(crate) fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }
}

impl fmt::Display for ScuttleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(words) => write!(f, "Invalid action {words:?}"),
            Self::Lookup(name) => write!(f, "I can't see {name} here"),
            Self::IncompatibleUse(direct, indirect) => {
                write!(f, "Can't use {direct} with {indirect}")
            }
            Self::Type(message) => f.write_str(message),
            Self::UncaughtReturn => f.write_str("a shovel's return escaped every enclosing block"),
            Self::Io(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ScuttleError {}

impl From<std::io::Error> for ScuttleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
