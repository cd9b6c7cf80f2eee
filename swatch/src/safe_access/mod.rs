// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds-safe read access into ordered sequences.
//!
//! Out-of-range access is an expected, common case in UI-adjacent code, not an
//! exceptional one. Every operation here therefore models "not there" as the absent
//! case of [`Option`] - never a panic, never a sentinel value. The one exception is
//! [`RandomElementPick::random_element`], whose contract genuinely requires a
//! non-empty sequence and says so with [`EmptySequenceError`].
//!
//! This module provides:
//! - **Element access**: [`SafeElementAccess`] - single element lookup and in-place
//!   swapping over slices.
//! - **Range access**: [`SafeSubslice`] - half-open and closed range sub-slicing.
//! - **Text access**: [`GraphemeAccess`] - the same contracts over [`str`], indexed
//!   by user-perceived characters (extended grapheme clusters).
//! - **Random pick**: [`RandomElementPick`].

// Attach.
mod element_access;
mod random_pick;
mod range_access;
mod string_access;

// Re-export.
pub use element_access::*;
pub use random_pick::*;
pub use range_access::*;
pub use string_access::*;
