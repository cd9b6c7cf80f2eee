// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA color value and its hexadecimal string codec.
//!
//! This module provides:
//! - **Value type**: [`RgbaValue`] - four normalized `f64` channels, immutable once
//!   constructed.
//! - **Codec**: [`try_parse_hex_color`], [`parse_hex_color_or`] and
//!   [`hex_color_string_from`] for the `#RGB` / `#RGBA` / `#RRGGBB` / `#RRGGBBAA`
//!   notations, with [`ColorCodecError`] naming each failure cause.
//! - **Random generation**: [`generate_random_color`].
//!
//! The same operations are also reachable as methods on [`RgbaValue`]
//! ([`RgbaValue::try_from_hex_color`], [`RgbaValue::to_hex_color`], …) which is the
//! surface most callers want.

// Attach.
mod codec_error;
mod hex_codec;
mod random;
mod rgba_value;

// Re-export.
pub use codec_error::*;
pub use hex_codec::*;
pub use random::*;
pub use rgba_value::*;
