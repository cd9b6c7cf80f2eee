// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # swatch
//!
//! Small, framework-independent conveniences that sit on top of plain values:
//!
//! 1. 🎨 **Color codec** - [`RgbaValue`] holds a color as four normalized `f64`
//!    channels, and converts to / from the `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`
//!    hexadecimal notations. Decoding reports *why* a string was rejected (missing
//!    prefix, bad length, bad digits) via [`ColorCodecError`], and encoding refuses
//!    wide-gamut channel values the simple RGB model cannot represent. A best-effort
//!    variant substitutes a caller-supplied fallback instead of failing.
//!
//! 2. 🛟 **Safe access** - bounds-checked element access, sub-slicing, and in-place
//!    swapping over slices ([`SafeElementAccess`], [`SafeSubslice`]), plus
//!    grapheme-cluster-indexed substring extraction over [`str`] ([`GraphemeAccess`]).
//!    Out-of-range access is an expected, common case in UI-adjacent code, so these
//!    return [`Option`] rather than panicking or raising.
//!
//! 3. 📐 **Unit conversions** - degrees↔radians for integer and floating types
//!    ([`AngleUnitConversion`]), and explicit lossy numeric casts
//!    ([`LossyConvertToByte`], [`LossyConvertToInt`], [`ConvertToFloat`]) that keep
//!    clippy's cast lints enabled everywhere else.
//!
//! All operations are synchronous, run to completion on the caller's thread, and hold
//! no shared mutable state. The one mutating operation
//! ([`SafeElementAccess::swap_safe`]) works in place on a caller-owned slice.
//!
//! ```
//! use swatch::{RgbaValue, SafeElementAccess, GraphemeAccess};
//!
//! let color = RgbaValue::try_from_hex_color("#FF8000").unwrap();
//! assert_eq!((color.red_byte(), color.green_byte(), color.blue_byte()), (255, 128, 0));
//!
//! let xs = [10, 20, 30];
//! assert_eq!(xs.element_at(1), Some(&20));
//! assert_eq!(xs.element_at(-1), None);
//!
//! assert_eq!("Hello World!".grapheme_range(6..11), Some("World"));
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr
// ensures test code within the library can also use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod color;
pub mod decl_macros;
pub mod safe_access;
pub mod stack_alloc_types;
pub mod units;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use color::*;
pub use safe_access::*;
pub use stack_alloc_types::*;
pub use units::*;
