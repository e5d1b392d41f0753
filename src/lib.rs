//! Demangling for a subset of the Itanium C++ ABI symbol mangling grammar.
//!
//! A C++ compiler encodes the fully qualified name and signature of a
//! function into a linker symbol. For example
//!
//! ```c++
//! namespace space {
//!   int foo(int x, int y) { return x+y; }
//! }
//! ```
//!
//! becomes `_ZN5space3fooEii`, which this crate turns back into
//! `space::foo(int, int)`.
//!
//! The supported subset covers nested and unscoped names, the
//! standard-library abbreviations `St`, `Sa`, `Sb`, `Ss`, `Si`, `So` and
//! `Sd`, built-in types, cv-qualifiers, pointers, references and vendor
//! suffixes. Templates, substitutions, arrays, function types and operator
//! names are not supported; symbols using them are returned unchanged.
//!
//! ```
//! assert_eq!(cxx_mangle_rs::demangle("_ZN1a1S3fooEv"), "a::S::foo(void)");
//! assert_eq!(cxx_mangle_rs::demangle("printf"), "printf");
//! ```

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod ast;
pub mod demangle;
pub mod mangle;
pub mod parse;
pub mod pretty;

mod error;
mod index_str;

#[cfg(test)]
mod generated_tests;
#[cfg(test)]
mod quickcheck_testing;

pub use crate::demangle::{DemangleOptions, MangledSymbol, Outcome};
pub use crate::error::{Error, Result};
pub use crate::index_str::IndexStr;

/// Whether `symbol` carries one of the mangling prefixes `_Z` or `__Z`.
///
/// This is a cheap filter; it does not check that the rest is well-formed.
pub fn is_mangled(symbol: &str) -> bool {
    demangle::strip_mangling_prefix(symbol).is_some()
}

/// Demangle `symbol`, or return it unchanged if it is not mangled or cannot
/// be parsed.
pub fn demangle(symbol: &str) -> String {
    MangledSymbol::new(symbol).into_string()
}

pub fn demangle_with(symbol: &str, options: &DemangleOptions) -> String {
    MangledSymbol::with_options(symbol, options).into_string()
}

/// Parse a mangled symbol. Returns `Ok(None)` if it carries no mangling
/// prefix.
pub fn mangled_symbol_to_ast(mangled: &str) -> Result<Option<ast::Symbol>> {
    match demangle::strip_mangling_prefix(mangled) {
        Some(input) => {
            let ctx = parse::ParseContext::default();
            demangle::parse_symbol(&ctx, input).map(Some)
        }
        None => Ok(None),
    }
}

pub fn ast_to_demangled_symbol(symbol: &ast::Symbol) -> String {
    let mut out = String::new();
    symbol.pretty_print(&mut out);
    out
}

pub fn ast_to_mangled_symbol(symbol: &ast::Symbol) -> String {
    let mut out = String::new();
    symbol.mangle(&mut out);
    out
}
