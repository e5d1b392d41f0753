//! Recursive-descent parsers for names, types and parameter lists.
//!
//! Every parser takes the cursor by value and returns
//! `Result<Option<(T, IndexStr)>>`: `Ok(Some(..))` with the advanced tail on
//! success, `Ok(None)` when the input does not start with this production
//! and nothing was consumed, and `Err(..)` when it does but is malformed.

use crate::ast::*;
use crate::demangle::DemangleOptions;
use crate::error::{Error, Result};
use crate::index_str::IndexStr;

/// Limits shared by all parsers working on one symbol.
#[derive(Debug, Clone)]
pub struct ParseContext {
    max_recursion: u32,
}

impl ParseContext {
    pub fn new(options: &DemangleOptions) -> ParseContext {
        ParseContext {
            max_recursion: options.max_recursion,
        }
    }
}

impl Default for ParseContext {
    fn default() -> ParseContext {
        ParseContext::new(&DemangleOptions::default())
    }
}

/// Read a run of decimal digits.
///
/// Leading zeroes are part of the run: `000001` is 1 with six bytes
/// consumed.
pub fn parse_decimal(input: IndexStr) -> Result<Option<(usize, IndexStr)>> {
    let digits = input
        .as_str()
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();

    if digits == 0 {
        return Ok(None);
    }

    let mut value: usize = 0;
    for &byte in &input.as_str().as_bytes()[..digits] {
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add(usize::from(byte - b'0')))
            .ok_or(Error::Overflow)?;
    }

    Ok(Some((value, input.range_from(digits..))))
}

fn parse_len_prefixed_ident(input: IndexStr) -> Result<Option<(String, IndexStr)>> {
    let (len, tail) = match parse_decimal(input)? {
        Some(found) => found,
        None => return Ok(None),
    };

    if len == 0 {
        return Err(Error::EmptyName);
    }

    if tail.len() < len {
        return Err(Error::NameTooShort {
            declared: len,
            available: tail.len(),
        });
    }

    let (ident, tail) = tail.try_split_at(len).ok_or(Error::NotCharBoundary)?;

    Ok(Some((ident.as_str().to_string(), tail)))
}

fn parse_abbreviation(input: IndexStr) -> Option<(Abbreviation, IndexStr)> {
    if input.peek() != Some(b'S') {
        return None;
    }

    let abbreviation = Abbreviation::from_code(input.peek_second()?)?;

    Some((abbreviation, input.range_from(2..)))
}

/// `[L] <length> <identifier>`
pub fn parse_unscoped_name(input: IndexStr) -> Result<Option<(UnscopedName, IndexStr)>> {
    let (is_const, tail) = if input.peek() == Some(b'L') {
        (true, input.range_from(1..))
    } else {
        (false, input)
    };

    Ok(parse_len_prefixed_ident(tail)?
        .map(|(ident, tail)| (UnscopedName { ident, is_const }, tail)))
}

/// `N [K|L]* <segment>+ E` or `<abbreviation> <segment>*`, where a
/// segment is an abbreviation or `[L] <length> <identifier>`
pub fn parse_scoped_name(input: IndexStr) -> Result<(ScopedName, IndexStr)> {
    let nested = input.peek() == Some(b'N');
    let mut tail = if nested { input.range_from(1..) } else { input };
    let mut is_const = false;

    if nested {
        loop {
            match tail.peek() {
                Some(b'K') => is_const = true,
                // Internal linkage, does not show up in the output.
                Some(b'L') => {}
                _ => break,
            }
            tail = tail.range_from(1..);
        }
    }

    let mut segments = Vec::new();

    while !tail.is_empty() {
        if let Some((abbreviation, rest)) = parse_abbreviation(tail) {
            segments.push(NameSegment::Abbreviation(abbreviation));
            tail = rest;
            continue;
        }

        // Linkage markers on inner segments are accepted and dropped.
        let segment = if tail.peek() == Some(b'L') {
            parse_len_prefixed_ident(tail.range_from(1..))?
        } else {
            parse_len_prefixed_ident(tail)?
        };

        match segment {
            Some((ident, rest)) => {
                segments.push(NameSegment::Ident(ident));
                tail = rest;
            }
            None => {
                if !nested && tail.peek() == Some(b'E') {
                    return Err(Error::ImplicitScopeTerminated);
                }
                break;
            }
        }
    }

    if nested {
        if tail.peek() != Some(b'E') {
            return Err(Error::UnterminatedScope {
                found: tail.peek_char(),
            });
        }
        tail = tail.range_from(1..);
    }

    if segments.is_empty() {
        return Err(Error::NoNameParts);
    }

    Ok((
        ScopedName {
            segments,
            nested,
            is_const,
        },
        tail,
    ))
}

/// Dispatch to the scoped or unscoped name parser.
pub fn parse_name(input: IndexStr) -> Result<Option<(Name, IndexStr)>> {
    match input.peek() {
        Some(b'N') | Some(b'S') => {
            let (name, tail) = parse_scoped_name(input)?;
            Ok(Some((Name::Scoped(name), tail)))
        }
        _ => Ok(parse_unscoped_name(input)?.map(|(name, tail)| (Name::Unscoped(name), tail))),
    }
}

/// Bytes that may follow the last parameter without being a parse error.
const TYPE_TERMINATORS: &[u8] = b".";

/// `[K] [V] (P|R|O) <type>`, `[K] [V] <builtin>` or `[K] [V] <name>`
pub fn parse_type<'a>(
    ctx: &ParseContext,
    input: IndexStr<'a>,
    depth: u32,
) -> Result<Option<(QualifiedType, IndexStr<'a>)>> {
    if depth >= ctx.max_recursion {
        return Err(Error::TooMuchRecursion);
    }

    let mut tail = input;
    let mut cv = CvQualifiers::default();

    if tail.peek() == Some(b'K') {
        cv.is_const = true;
        tail = tail.range_from(1..);
    }
    if tail.peek() == Some(b'V') {
        cv.is_volatile = true;
        tail = tail.range_from(1..);
    }

    let qualifier = match tail.peek() {
        Some(b'P') => Some(RefQualifier::Pointer),
        Some(b'R') => Some(RefQualifier::Reference),
        Some(b'O') => Some(RefQualifier::RValueReference),
        _ => None,
    };

    if let Some(qualifier) = qualifier {
        let (referent, tail) = match parse_type(ctx, tail.range_from(1..), depth + 1)? {
            Some(found) => found,
            None => return Err(Error::MissingReferent),
        };

        if referent.ref_qualifier().map_or(false, RefQualifier::is_reference) {
            return Err(if qualifier.is_reference() {
                Error::ReferenceToReference
            } else {
                Error::PointerToReference
            });
        }

        let ty = QualifiedType {
            cv,
            kind: TypeKind::Wrapper(qualifier, Box::new(referent)),
        };
        return Ok(Some((ty, tail)));
    }

    if let Some(builtin) = tail.peek().and_then(BuiltinType::from_code) {
        let ty = QualifiedType {
            cv,
            kind: TypeKind::Builtin(builtin),
        };
        return Ok(Some((ty, tail.range_from(1..))));
    }

    match parse_name(tail)? {
        Some((name, tail)) => {
            let ty = QualifiedType {
                cv,
                kind: TypeKind::Named(name),
            };
            Ok(Some((ty, tail)))
        }
        None => match tail.peek() {
            Some(byte) if TYPE_TERMINATORS.contains(&byte) => Ok(None),
            _ => Err(Error::UnparsableType(input.as_str().to_string())),
        },
    }
}

/// Parse parameter types until the input ends or a terminator is reached.
///
/// An empty list means the symbol names a variable.
pub fn parse_parameter_list<'a>(
    ctx: &ParseContext,
    input: IndexStr<'a>,
) -> Result<(ParameterList, IndexStr<'a>)> {
    let mut params = Vec::new();
    let mut tail = input;

    while !tail.is_empty() {
        match parse_type(ctx, tail, 0)? {
            Some((param, rest)) => {
                params.push(param);
                tail = rest;
            }
            None => break,
        }
    }

    Ok((ParameterList(params), tail))
}
