//! Provides the `IndexStr` cursor, a substring that remembers where it starts
//! in the original mangled symbol.

use std::fmt;
use std::ops::RangeFrom;

/// A tail of the mangled input together with its offset into the original
/// string.
///
/// `IndexStr` is `Copy`, so a parser that fails simply drops its copy and the
/// caller still holds the cursor it started from.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IndexStr<'a> {
    idx: usize,
    string: &'a str,
}

impl<'a> IndexStr<'a> {
    /// Construct a new `IndexStr` (with `index == 0`) from the given input.
    #[inline]
    pub fn new(string: &'a str) -> IndexStr<'a> {
        IndexStr { idx: 0, string }
    }

    /// Length in bytes of the remaining input.
    #[inline]
    pub fn len(&self) -> usize {
        self.string.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// The offset of this tail in the original input.
    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    /// The remaining input.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.string
    }

    /// Peek at the next byte.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.string.as_bytes().first().copied()
    }

    /// Peek at the byte after the next one.
    #[inline]
    pub fn peek_second(&self) -> Option<u8> {
        self.string.as_bytes().get(1).copied()
    }

    /// Peek at the next whole character, for error messages.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.string.chars().next()
    }

    /// Split off the first `idx` bytes.
    ///
    /// Returns `None` if `idx` is past the end or does not fall on a
    /// character boundary.
    #[inline]
    pub fn try_split_at(&self, idx: usize) -> Option<(IndexStr<'a>, IndexStr<'a>)> {
        let head = self.string.get(..idx)?;
        let tail = self.string.get(idx..)?;

        Some((
            IndexStr {
                idx: self.idx,
                string: head,
            },
            IndexStr {
                idx: self.idx + idx,
                string: tail,
            },
        ))
    }

    /// Take the given `start..` range of the remaining input.
    ///
    /// Only called after matching ASCII bytes, so `start` always lies on a
    /// character boundary. Panics otherwise.
    #[inline]
    pub fn range_from(&self, idx: RangeFrom<usize>) -> IndexStr<'a> {
        IndexStr {
            idx: self.idx + idx.start,
            string: &self.string[idx],
        }
    }

    /// The empty tail at the end of the input.
    #[inline]
    pub fn end(&self) -> IndexStr<'a> {
        self.range_from(self.len()..)
    }
}

impl<'a> fmt::Debug for IndexStr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "IndexStr {{ idx: {}, string: {:?} }}",
            self.idx, self.string
        )
    }
}
