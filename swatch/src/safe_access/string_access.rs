// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds-checked text access, indexed by user-perceived characters.
//!
//! Byte-offset slicing of a [`str`] panics on non-boundary offsets, and [`char`]
//! indexing splits user-perceived characters (a flag emoji is one "character" but
//! multiple `char`s). These operations index by extended grapheme cluster instead, so
//! an index means what a reader would count, and out-of-range access is the absent
//! case - same contract as the slice operations in this module's siblings.

use std::ops::{Range, RangeInclusive};

use unicode_segmentation::UnicodeSegmentation;

/// Bounds-safe, grapheme-cluster-indexed read access over [`str`].
pub trait GraphemeAccess {
    /// Returns the grapheme cluster at `arg_index`, or `None` when the index is out
    /// of range. Accepts any integer type; values that do not convert to [`usize`]
    /// (negative values) are out of range by definition.
    fn grapheme_at(&self, arg_index: impl TryInto<usize>) -> Option<&str>;

    /// Substring covering the half-open grapheme range `[start, end)`. `None` when
    /// the range is inverted or its upper bound exceeds the grapheme count; an empty
    /// in-bounds range yields `""`.
    fn grapheme_range(&self, arg_range: Range<usize>) -> Option<&str>;

    /// Substring covering the closed grapheme range `[start, end]` - one grapheme
    /// wider than [`GraphemeAccess::grapheme_range`] with the same bounds.
    fn grapheme_range_inclusive(&self, arg_range: RangeInclusive<usize>)
    -> Option<&str>;
}

impl GraphemeAccess for str {
    fn grapheme_at(&self, arg_index: impl TryInto<usize>) -> Option<&str> {
        let index = arg_index.try_into().ok()?;
        self.graphemes(true).nth(index)
    }

    fn grapheme_range(&self, arg_range: Range<usize>) -> Option<&str> {
        if arg_range.start > arg_range.end {
            return None;
        }
        let byte_start = byte_offset_of(self, arg_range.start)?;
        let byte_end = byte_offset_of(self, arg_range.end)?;
        Some(&self[byte_start..byte_end])
    }

    fn grapheme_range_inclusive(
        &self,
        arg_range: RangeInclusive<usize>,
    ) -> Option<&str> {
        let end_exclusive = arg_range.end().checked_add(1)?;
        self.grapheme_range(*arg_range.start()..end_exclusive)
    }
}

/// Byte offset where the grapheme cluster at `index` starts. `index == count` maps to
/// `text.len()` so it can serve as an exclusive upper bound; anything past that is
/// `None`.
fn byte_offset_of(text: &str, index: usize) -> Option<usize> {
    text.grapheme_indices(true)
        .map(|(byte_index, _)| byte_index)
        .chain(std::iter::once(text.len()))
        .nth(index)
}
