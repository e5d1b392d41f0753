//! `Error` and `Result` types for parsing mangled symbols.

use std::error;
use std::fmt;

/// Errors that can occur while parsing a mangled symbol.
///
/// Every error is terminal for the symbol being parsed: the public
/// `demangle` function falls back to the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Nothing after the mangling prefix could be read as a name.
    MissingName,

    /// A length prefix declared more bytes than the input has left.
    NameTooShort { declared: usize, available: usize },

    /// A length prefix of zero.
    EmptyName,

    /// A scoped name without a single segment.
    NoNameParts,

    /// An `N...E` scope whose closing `E` is missing.
    UnterminatedScope { found: Option<char> },

    /// An `E` after a scope that was not opened with `N`, such as `St`.
    ImplicitScopeTerminated,

    /// A `P`, `R` or `O` qualifier without a type to qualify.
    MissingReferent,

    /// A pointer to a reference or rvalue reference.
    PointerToReference,

    /// A reference or rvalue reference to another reference.
    ReferenceToReference,

    /// The remaining input does not start with a supported type.
    UnparsableType(String),

    /// Input left over after the symbol was parsed.
    IncompleteParse(String),

    /// A length prefix that does not fit in a `usize`.
    Overflow,

    /// A length prefix that ends inside a multi-byte character.
    NotCharBoundary,

    /// Qualifiers nested deeper than the configured recursion limit.
    TooMuchRecursion,
}

fn describe(found: Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingName => write!(f, "failed to read name"),
            Error::NameTooShort {
                declared,
                available,
            } => write!(
                f,
                "name too short: length prefix declares {} bytes but only {} remain",
                declared, available
            ),
            Error::EmptyName => write!(f, "name too short: length prefix is zero"),
            Error::NoNameParts => write!(f, "no name parts"),
            Error::UnterminatedScope { found } => write!(
                f,
                "unterminated scope: expected 'E'; found {} instead",
                describe(found)
            ),
            Error::ImplicitScopeTerminated => write!(f, "tried to terminate implicit scope"),
            Error::MissingReferent => write!(f, "missing referent for pointer or reference"),
            Error::PointerToReference => write!(f, "C++ forbids pointer to reference"),
            Error::ReferenceToReference => write!(f, "C++ forbids reference to reference"),
            Error::UnparsableType(ref rest) => write!(f, "couldn't parse type '{}'", rest),
            Error::IncompleteParse(ref rest) => write!(f, "incomplete parse: '{}'", rest),
            Error::Overflow => write!(f, "length prefix overflows"),
            Error::NotCharBoundary => {
                write!(f, "length prefix splits a multi-byte character")
            }
            Error::TooMuchRecursion => {
                write!(f, "encountered too much recursion when parsing symbol")
            }
        }
    }
}

impl error::Error for Error {}

/// A parsing result of `T` or an `Error`.
pub type Result<T> = ::std::result::Result<T, Error>;
