// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric unit conversion traits.
//!
//! This module provides:
//! - **Angle units**: [`AngleUnitConversion`] for degrees↔radians.
//! - **Lossy casts**: [`LossyConvertToByte`], [`LossyConvertToInt`] and
//!   [`ConvertToFloat`] for intentional, clippy-clean primitive conversions.

// Attach.
mod angle;
mod lossy_convert;

// Re-export.
pub use angle::*;
pub use lossy_convert::*;
