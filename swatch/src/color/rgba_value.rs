// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA color representation with normalized `f64` channels.

use crate::{ColorCodecError, InlineString, LossyConvertToByte};

/// Represents a color as four independent channels: red, green, blue and alpha, each a
/// normalized `f64`. `0.0` is the channel minimum, `1.0` the maximum, and alpha `1.0`
/// means fully opaque.
///
/// A value is created either from explicit channel values (constructors below) or by
/// decoding a hexadecimal string ([`RgbaValue::try_from_hex_color`]); it is immutable
/// once constructed. Channels outside `[0.0, 1.0]` can be constructed - wide-gamut
/// callers produce them - but such a value can not be hex-encoded
/// (see [`ColorCodecError::OutOfGamut`]).
#[derive(Clone, PartialEq, Copy, Debug)]
pub struct RgbaValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for RgbaValue {
    /// Opaque white.
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

mod construct {
    use super::RgbaValue;

    impl RgbaValue {
        /// Channel values are taken as given - no clamping.
        #[must_use]
        pub fn from_f64(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
            Self {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Fully opaque color from byte channels.
        #[must_use]
        pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
            Self::from_u8_with_alpha(red, green, blue, 255)
        }

        #[must_use]
        pub fn from_u8_with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
            Self {
                red: f64::from(red) / 255.0,
                green: f64::from(green) / 255.0,
                blue: f64::from(blue) / 255.0,
                alpha: f64::from(alpha) / 255.0,
            }
        }
    }

    impl From<(u8, u8, u8)> for RgbaValue {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self::from_u8(red, green, blue)
        }
    }

    impl From<(u8, u8, u8, u8)> for RgbaValue {
        fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
            Self::from_u8_with_alpha(red, green, blue, alpha)
        }
    }

    impl From<u32> for RgbaValue {
        /// Fully opaque color from a packed `0xRRGGBB` word. Bits above the low 24 are
        /// ignored.
        fn from(value: u32) -> Self {
            use crate::LossyConvertToByte;
            let red = ((value >> 16) & 0xFF).to_u8_lossy();
            let green = ((value >> 8) & 0xFF).to_u8_lossy();
            let blue = (value & 0xFF).to_u8_lossy();
            Self::from_u8(red, green, blue)
        }
    }
}

mod channel_access {
    use super::{LossyConvertToByte, RgbaValue};

    impl RgbaValue {
        /// Red channel as a byte, `channel × 255` truncated.
        #[must_use]
        pub fn red_byte(&self) -> u8 { (self.red * 255.0).to_u8_lossy() }

        /// Green channel as a byte, `channel × 255` truncated.
        #[must_use]
        pub fn green_byte(&self) -> u8 { (self.green * 255.0).to_u8_lossy() }

        /// Blue channel as a byte, `channel × 255` truncated.
        #[must_use]
        pub fn blue_byte(&self) -> u8 { (self.blue * 255.0).to_u8_lossy() }

        /// Alpha channel as a byte, `channel × 255` truncated.
        #[must_use]
        pub fn alpha_byte(&self) -> u8 { (self.alpha * 255.0).to_u8_lossy() }

        #[must_use]
        pub fn is_opaque(&self) -> bool { self.alpha >= 1.0 }

        /// Whether all four channels lie in `[0.0, 1.0]`, i.e. the value is
        /// representable in the simple RGB model and can be hex-encoded.
        #[must_use]
        pub fn is_in_gamut(&self) -> bool {
            [self.red, self.green, self.blue, self.alpha]
                .iter()
                .all(|channel| (0.0..=1.0).contains(channel))
        }
    }
}

mod hex_conversions {
    use super::{ColorCodecError, InlineString, RgbaValue};
    use crate::color::hex_codec;

    impl RgbaValue {
        /// Decodes a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` string.
        ///
        /// # Errors
        ///
        /// Returns [`ColorCodecError::InvalidFormat`] when the `#` prefix is missing,
        /// [`ColorCodecError::InvalidLength`] when the digit count is not 3, 4, 6
        /// or 8, and [`ColorCodecError::InvalidDigits`] when a non-hex character is
        /// present.
        pub fn try_from_hex_color(input: &str) -> Result<RgbaValue, ColorCodecError> {
            hex_codec::try_parse_hex_color(input)
        }

        /// Best-effort variant of [`RgbaValue::try_from_hex_color`]: substitutes
        /// `fallback` on any decode failure, never fails.
        #[must_use]
        pub fn from_hex_color_or(input: &str, fallback: RgbaValue) -> RgbaValue {
            hex_codec::parse_hex_color_or(input, fallback)
        }

        /// Encodes as uppercase `#RRGGBB`, or `#RRGGBBAA` when `include_alpha` is
        /// `true`. Channels are scaled by 255 and rounded to the nearest integer.
        ///
        /// # Errors
        ///
        /// Returns [`ColorCodecError::OutOfGamut`] when any channel lies outside
        /// `[0.0, 1.0]`.
        pub fn to_hex_color(
            &self,
            include_alpha: bool,
        ) -> Result<InlineString, ColorCodecError> {
            hex_codec::hex_color_string_from(*self, include_alpha)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_from_u8() {
        let value = RgbaValue::from_u8(255, 128, 0);
        assert_eq2!(value.red, 1.0);
        assert!((value.green - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq2!(value.blue, 0.0);
        assert_eq2!(value.alpha, 1.0);
    }

    #[test]
    fn test_default_is_opaque_white() {
        let value = RgbaValue::default();
        assert_eq2!(value, RgbaValue::from_u8(255, 255, 255));
        assert!(value.is_opaque());
    }

    #[test_case((0, 0, 0), (0, 0, 0))]
    #[test_case((255, 255, 255), (255, 255, 255))]
    #[test_case((47, 20, 223), (47, 20, 223))]
    fn test_channel_bytes_round_trip(input: (u8, u8, u8), expected: (u8, u8, u8)) {
        let value = RgbaValue::from(input);
        assert_eq2!(
            (value.red_byte(), value.green_byte(), value.blue_byte()),
            expected
        );
    }

    #[test]
    fn test_from_packed_u32() {
        let value = RgbaValue::from(0x2F14DF);
        assert_eq2!(
            (value.red_byte(), value.green_byte(), value.blue_byte()),
            (47, 20, 223)
        );
        assert!(value.is_opaque());
    }

    #[test]
    fn test_from_tuple_with_alpha() {
        let value = RgbaValue::from((255, 0, 0, 128));
        assert_eq2!(value.alpha_byte(), 128);
        assert!(!value.is_opaque());
    }

    #[test]
    fn test_gamut_predicate() {
        assert!(RgbaValue::from_u8(1, 2, 3).is_in_gamut());
        assert!(!RgbaValue::from_f64(1.2, 0.0, 0.0, 1.0).is_in_gamut());
        assert!(!RgbaValue::from_f64(0.0, -0.1, 0.0, 1.0).is_in_gamut());
    }
}
