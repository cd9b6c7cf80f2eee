// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Degrees↔radians conversion for the numeric types angle math is usually done with.
//!
//! Integer degree values (rotation steps, slider positions) convert into [`f64`]
//! radians; floating inputs stay in their own precision.

use crate::ConvertToFloat;

/// Converts between degrees and radians using the standard `π / 180` factor.
pub trait AngleUnitConversion {
    /// The floating point type the conversion produces.
    type Output;

    /// Interprets `self` as degrees and returns the equivalent radians.
    #[must_use]
    fn degrees_to_radians(self) -> Self::Output;

    /// Interprets `self` as radians and returns the equivalent degrees.
    #[must_use]
    fn radians_to_degrees(self) -> Self::Output;
}

impl AngleUnitConversion for f64 {
    type Output = f64;

    fn degrees_to_radians(self) -> f64 { self.to_radians() }

    fn radians_to_degrees(self) -> f64 { self.to_degrees() }
}

impl AngleUnitConversion for f32 {
    type Output = f32;

    fn degrees_to_radians(self) -> f32 { self.to_radians() }

    fn radians_to_degrees(self) -> f32 { self.to_degrees() }
}

impl AngleUnitConversion for i32 {
    type Output = f64;

    fn degrees_to_radians(self) -> f64 { self.to_f64_lossy().to_radians() }

    fn radians_to_degrees(self) -> f64 { self.to_f64_lossy().to_degrees() }
}

impl AngleUnitConversion for i64 {
    type Output = f64;

    fn degrees_to_radians(self) -> f64 { self.to_f64_lossy().to_radians() }

    fn radians_to_degrees(self) -> f64 { self.to_f64_lossy().to_degrees() }
}
