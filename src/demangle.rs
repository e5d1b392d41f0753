//! The top-level driver: prefix detection, the name and parameter parsers,
//! vendor suffix extraction and the final rendering.

use std::fmt;

use tracing::{debug, trace};

use crate::ast::Symbol;
use crate::error::{Error, Result};
use crate::index_str::IndexStr;
use crate::parse::{self, ParseContext};

/// The accepted mangling prefixes. Some toolchains add an extra leading
/// underscore.
pub const MANGLING_PREFIXES: [&str; 2] = ["_Z", "__Z"];

const VENDOR_SEPARATOR: u8 = b'.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemangleOptions {
    /// How deeply pointer and reference qualifiers may nest.
    pub max_recursion: u32,
}

impl Default for DemangleOptions {
    fn default() -> DemangleOptions {
        DemangleOptions { max_recursion: 96 }
    }
}

/// What became of one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input does not carry a mangling prefix.
    NotMangled,
    Demangled(Symbol),
    Errored(Error),
}

/// Returns the input after its mangling prefix, or `None`.
pub fn strip_mangling_prefix(raw: &str) -> Option<IndexStr> {
    MANGLING_PREFIXES
        .iter()
        .find(|prefix| raw.starts_with(*prefix))
        .map(|prefix| IndexStr::new(raw).range_from(prefix.len()..))
}

/// Parse everything after the mangling prefix into a `Symbol`.
pub fn parse_symbol(ctx: &ParseContext, input: IndexStr) -> Result<Symbol> {
    let mut tail = input;

    let is_const = tail.peek() == Some(b'K');
    if is_const {
        tail = tail.range_from(1..);
    }

    let (name, rest) = parse::parse_name(tail)?.ok_or(Error::MissingName)?;
    tail = rest;

    let mut params = None;
    if !tail.is_empty() {
        let (list, rest) = parse::parse_parameter_list(ctx, tail)?;
        if !list.is_empty() {
            params = Some(list);
            tail = rest;
        }
    }

    let mut vendor_suffix = None;
    if tail.peek() == Some(VENDOR_SEPARATOR) {
        let suffix = tail.range_from(1..).as_str();
        trace!(suffix, offset = tail.index(), "captured vendor suffix");
        vendor_suffix = Some(suffix.to_string());
        tail = tail.end();
    }

    if !tail.is_empty() {
        return Err(Error::IncompleteParse(tail.as_str().to_string()));
    }

    Ok(Symbol {
        name,
        params,
        is_const,
        vendor_suffix,
    })
}

/// A raw symbol together with the result of demangling it.
///
/// The parse happens once, in `MangledSymbol::new`; afterwards the value is
/// only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangledSymbol<'a> {
    raw: &'a str,
    outcome: Outcome,
    demangled: String,
}

impl<'a> MangledSymbol<'a> {
    pub fn new(raw: &'a str) -> MangledSymbol<'a> {
        MangledSymbol::with_options(raw, &DemangleOptions::default())
    }

    pub fn with_options(raw: &'a str, options: &DemangleOptions) -> MangledSymbol<'a> {
        let outcome = match strip_mangling_prefix(raw) {
            None => Outcome::NotMangled,
            Some(input) => {
                let ctx = ParseContext::new(options);
                match parse_symbol(&ctx, input) {
                    Ok(symbol) => Outcome::Demangled(symbol),
                    Err(err) => {
                        debug!(symbol = raw, error = %err, "failed to demangle symbol");
                        Outcome::Errored(err)
                    }
                }
            }
        };

        let demangled = match outcome {
            Outcome::Demangled(ref symbol) => {
                let demangled = symbol.to_string();
                trace!(symbol = raw, demangled = demangled.as_str(), "demangled symbol");
                demangled
            }
            Outcome::NotMangled | Outcome::Errored(_) => raw.to_string(),
        };

        MangledSymbol {
            raw,
            outcome,
            demangled,
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self.outcome {
            Outcome::Demangled(ref symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self.outcome {
            Outcome::Errored(ref err) => Some(err),
            _ => None,
        }
    }

    pub fn vendor_suffix(&self) -> Option<&str> {
        self.symbol()
            .and_then(|symbol| symbol.vendor_suffix.as_ref())
            .map(String::as_str)
    }

    /// The demangled text, or the raw input if it was not demangled.
    pub fn demangled(&self) -> &str {
        &self.demangled
    }

    pub fn into_string(self) -> String {
        self.demangled
    }
}

impl<'a> fmt::Display for MangledSymbol<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.demangled)
    }
}
