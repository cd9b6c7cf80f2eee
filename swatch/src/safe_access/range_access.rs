// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds-checked range sub-slicing with explicit half-open vs closed semantics.

use std::ops::{Range, RangeInclusive};

/// Bounds-safe contiguous range extraction from a slice.
///
/// The two methods differ only in whether the upper bound itself is included:
///
/// ```text
///           ╭────── slice.len()=10 ─────────────╮
/// Index:    0   1   2   3   4   5   6   7   8   9   10 (invalid index)
///         ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
///         │ A │ B │ C │ D │ E │ F │ G │ H │ I │ J │ ! │
///         └───┴───┴───┴───┴───┴─▲─┴───┴───┴───┴─▲─┴───┘
///                               ╰── 5..10 ──────────╯   half-open, end exclusive
///                               ╰── 5..=9 ──────────╯   closed, same elements
/// ```
///
/// For the same bound values the closed form covers one more element: `5..=9` equals
/// `5..10`. The half-open end may equal `len()` (nothing past the end is read); the
/// closed end must stay below it. Lower bounds below the sequence start can not even
/// be expressed with [`usize`] bounds.
pub trait SafeSubslice {
    type Item;

    /// Sub-slice for the half-open range `[start, end)`. `None` when the range is
    /// inverted or its upper bound exceeds the length; an empty in-bounds range yields
    /// an empty slice.
    fn subslice(&self, arg_range: Range<usize>) -> Option<&[Self::Item]>;

    /// Sub-slice for the closed range `[start, end]` - one element wider than
    /// [`SafeSubslice::subslice`] with the same bounds. The closed range `[a, a-1]`
    /// counts as the empty range at position `a`.
    fn subslice_inclusive(
        &self,
        arg_range: RangeInclusive<usize>,
    ) -> Option<&[Self::Item]>;
}

impl<T> SafeSubslice for [T] {
    type Item = T;

    fn subslice(&self, arg_range: Range<usize>) -> Option<&[T]> {
        self.get(arg_range)
    }

    fn subslice_inclusive(&self, arg_range: RangeInclusive<usize>) -> Option<&[T]> {
        self.get(arg_range)
    }
}
