// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Codec between [`RgbaValue`] and its hexadecimal string encodings.
//!
//! Four fixed-width forms are recognized, all with a leading `#`:
//!
//! ```text
//! #RGB       3 digits, one nibble per channel (value ÷ 15), alpha = opaque
//! #RGBA      4 digits, one nibble per channel (value ÷ 15)
//! #RRGGBB    6 digits, one byte per channel (value ÷ 255), alpha = opaque
//! #RRGGBBAA  8 digits, one byte per channel (value ÷ 255)
//! ```
//!
//! Decoding a 6- or 8-digit string and re-encoding it at the same width is lossless.
//! The 3- and 4-digit forms carry 4 bits per channel, so each nibble lands on one of
//! the 16 representable levels; re-encoding such a value at 6/8-digit width is only
//! byte-identical when the original channel was already one of those levels.

use std::num::ParseIntError;

use nom::{IResult, Parser, bytes::complete::take_while_m_n, combinator::map_res};

use crate::{ColorCodecError, InlineString, LossyConvertToByte, RgbaValue};

/// Prefix marker every hex color encoding starts with.
pub const HEX_COLOR_PREFIX: &str = "#";

/// Decodes a hex color string into an [`RgbaValue`].
///
/// Digits map to channels positionally; the 3- and 6-digit forms default alpha to
/// fully opaque.
///
/// # Errors
///
/// - [`ColorCodecError::InvalidFormat`] - missing `#` prefix.
/// - [`ColorCodecError::InvalidLength`] - digit count not 3, 4, 6 or 8.
/// - [`ColorCodecError::InvalidDigits`] - non-hexadecimal characters.
pub fn try_parse_hex_color(input: &str) -> Result<RgbaValue, ColorCodecError> {
    let Some(digits) = input.strip_prefix(HEX_COLOR_PREFIX) else {
        return Err(ColorCodecError::InvalidFormat);
    };

    match digits.chars().count() {
        3 => {
            let (_, (red, green, blue)) = (
                helper_fns::parse_hex_nibble,
                helper_fns::parse_hex_nibble,
                helper_fns::parse_hex_nibble,
            )
                .parse(digits)
                .map_err(|_| ColorCodecError::InvalidDigits)?;
            Ok(RgbaValue::from_f64(
                nibble_channel(red),
                nibble_channel(green),
                nibble_channel(blue),
                1.0,
            ))
        }
        4 => {
            let (_, (red, green, blue, alpha)) = (
                helper_fns::parse_hex_nibble,
                helper_fns::parse_hex_nibble,
                helper_fns::parse_hex_nibble,
                helper_fns::parse_hex_nibble,
            )
                .parse(digits)
                .map_err(|_| ColorCodecError::InvalidDigits)?;
            Ok(RgbaValue::from_f64(
                nibble_channel(red),
                nibble_channel(green),
                nibble_channel(blue),
                nibble_channel(alpha),
            ))
        }
        6 => {
            let (_, (red, green, blue)) = (
                helper_fns::parse_hex_byte,
                helper_fns::parse_hex_byte,
                helper_fns::parse_hex_byte,
            )
                .parse(digits)
                .map_err(|_| ColorCodecError::InvalidDigits)?;
            Ok(RgbaValue::from_f64(
                byte_channel(red),
                byte_channel(green),
                byte_channel(blue),
                1.0,
            ))
        }
        8 => {
            let (_, (red, green, blue, alpha)) = (
                helper_fns::parse_hex_byte,
                helper_fns::parse_hex_byte,
                helper_fns::parse_hex_byte,
                helper_fns::parse_hex_byte,
            )
                .parse(digits)
                .map_err(|_| ColorCodecError::InvalidDigits)?;
            Ok(RgbaValue::from_f64(
                byte_channel(red),
                byte_channel(green),
                byte_channel(blue),
                byte_channel(alpha),
            ))
        }
        found => Err(ColorCodecError::InvalidLength { found }),
    }
}

/// Best-effort variant of [`try_parse_hex_color`]: substitutes `fallback` on any
/// decode failure instead of surfacing the error. Never fails.
#[must_use]
pub fn parse_hex_color_or(input: &str, fallback: RgbaValue) -> RgbaValue {
    match try_parse_hex_color(input) {
        Ok(color) => color,
        Err(error) => {
            tracing::debug!(input, %error, "substituting fallback for hex color");
            fallback
        }
    }
}

/// Encodes a color as uppercase `#RRGGBB`, or `#RRGGBBAA` when `include_alpha` is
/// `true`. Channels are scaled by 255 and rounded to the nearest integer, zero padded
/// to two digits each.
///
/// # Errors
///
/// Returns [`ColorCodecError::OutOfGamut`] when any channel (alpha included) lies
/// outside `[0.0, 1.0]`.
pub fn hex_color_string_from(
    color: RgbaValue,
    include_alpha: bool,
) -> Result<InlineString, ColorCodecError> {
    use std::fmt::Write as _;

    let channels = [
        ("red", color.red),
        ("green", color.green),
        ("blue", color.blue),
        ("alpha", color.alpha),
    ];
    for (channel, value) in channels {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorCodecError::OutOfGamut { channel, value });
        }
    }

    let red = encode_channel(color.red);
    let green = encode_channel(color.green);
    let blue = encode_channel(color.blue);

    let mut acc = InlineString::new();
    if include_alpha {
        let alpha = encode_channel(color.alpha);
        _ = write!(acc, "#{red:02X}{green:02X}{blue:02X}{alpha:02X}");
    } else {
        _ = write!(acc, "#{red:02X}{green:02X}{blue:02X}");
    }

    Ok(acc)
}

/// Single hex digit carries 4 bits: `0..=15` scales by 15.
fn nibble_channel(nibble: u8) -> f64 { f64::from(nibble) / 15.0 }

/// Two hex digits carry 8 bits: `0..=255` scales by 255.
fn byte_channel(byte: u8) -> f64 { f64::from(byte) / 255.0 }

/// Gamut check has already run, so the scaled value is in `0.0..=255.0`.
fn encode_channel(value: f64) -> u8 { (value * 255.0).round().to_u8_lossy() }

/// Helper functions to match and parse hex digits. These are not [Parser]
/// implementations.
mod helper_fns {
    use super::{IResult, ParseIntError, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_byte(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_parse_valid_six_digit() {
        let color = try_parse_hex_color("#2F14DF").unwrap();
        assert_eq2!(
            (color.red_byte(), color.green_byte(), color.blue_byte()),
            (47, 20, 223)
        );
        assert!(color.is_opaque());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper = try_parse_hex_color("#FF8000").unwrap();
        let lower = try_parse_hex_color("#ff8000").unwrap();
        assert_eq2!(upper, lower);
    }

    #[test]
    fn test_parse_eight_digit_carries_alpha() {
        let color = try_parse_hex_color("#FF000080").unwrap();
        assert_eq2!(color.red_byte(), 255);
        assert_eq2!(color.alpha_byte(), 128);
    }

    #[test]
    fn test_parse_three_digit_scales_nibbles() {
        let color = try_parse_hex_color("#F00").unwrap();
        assert_eq2!(color.red, 1.0);
        assert_eq2!(color.green, 0.0);
        assert_eq2!(color.blue, 0.0);
        assert_eq2!(color.alpha, 1.0);

        // Intermediate nibble: 8 / 15, not 0x88 / 255.
        let color = try_parse_hex_color("#080").unwrap();
        assert!((color.green - 8.0 / 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_four_digit_scales_alpha_nibble() {
        let color = try_parse_hex_color("#F00F").unwrap();
        assert_eq2!(
            (color.red_byte(), color.green_byte(), color.blue_byte()),
            (255, 0, 0)
        );
        assert_eq2!(color.alpha, 1.0);
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq2!(
            try_parse_hex_color("FF0000"),
            Err(ColorCodecError::InvalidFormat)
        );
    }

    #[test_case("#12345", 5)]
    #[test_case("#", 0)]
    #[test_case("#12", 2)]
    #[test_case("#123456789", 9)]
    fn test_parse_invalid_length(input: &str, found: usize) {
        assert_eq2!(
            try_parse_hex_color(input),
            Err(ColorCodecError::InvalidLength { found })
        );
    }

    #[test_case("#GGG")]
    #[test_case("#FF00ZZ")]
    #[test_case("#ff 000")]
    fn test_parse_invalid_digits(input: &str) {
        assert_eq2!(
            try_parse_hex_color(input),
            Err(ColorCodecError::InvalidDigits)
        );
    }

    #[test]
    fn test_parse_or_fallback() {
        let fallback = RgbaValue::from_u8(1, 2, 3);
        assert_eq2!(parse_hex_color_or("oops", fallback), fallback);
        assert_eq2!(
            parse_hex_color_or("#00FF00", fallback),
            RgbaValue::from_u8(0, 255, 0)
        );
    }

    #[test]
    fn test_encode_six_digit() {
        let color = RgbaValue::from_u8(255, 128, 0);
        assert_eq2!(color.to_hex_color(false).unwrap().as_str(), "#FF8000");
    }

    #[test]
    fn test_encode_eight_digit() {
        let color = RgbaValue::from_u8_with_alpha(255, 128, 0, 64);
        assert_eq2!(color.to_hex_color(true).unwrap().as_str(), "#FF800040");
    }

    #[test]
    fn test_encode_out_of_gamut() {
        let color = RgbaValue::from_f64(1.2, 0.0, 0.0, 1.0);
        assert_eq2!(
            color.to_hex_color(false),
            Err(ColorCodecError::OutOfGamut {
                channel: "red",
                value: 1.2
            })
        );

        // Alpha is checked even when it is not encoded.
        let color = RgbaValue::from_f64(0.0, 0.0, 0.0, -0.5);
        assert!(matches!(
            color.to_hex_color(false),
            Err(ColorCodecError::OutOfGamut { channel: "alpha", .. })
        ));
    }

    #[test_case("#000000")]
    #[test_case("#FFFFFF")]
    #[test_case("#2F14DF")]
    #[test_case("#FF8000")]
    fn test_six_digit_round_trip(input: &str) {
        let color = try_parse_hex_color(input).unwrap();
        assert_eq2!(color.to_hex_color(false).unwrap().as_str(), input);
    }

    #[test_case("#00000000")]
    #[test_case("#FFFFFFFF")]
    #[test_case("#2F14DF80")]
    fn test_eight_digit_round_trip(input: &str) {
        let color = try_parse_hex_color(input).unwrap();
        assert_eq2!(color.to_hex_color(true).unwrap().as_str(), input);
    }

    #[test]
    fn test_round_trip_normalizes_case() {
        let color = try_parse_hex_color("#2f14df").unwrap();
        assert_eq2!(color.to_hex_color(false).unwrap().as_str(), "#2F14DF");
    }

    /// Decode → encode → decode must stabilize on the first decode's channels.
    #[test]
    fn test_repeated_round_trip_is_stable() {
        let first = try_parse_hex_color("#2F14DF80").unwrap();
        let encoded = first.to_hex_color(true).unwrap();
        let second = try_parse_hex_color(encoded.as_str()).unwrap();
        assert_eq2!(first, second);
    }

    /// A 3-digit decode only re-encodes byte-identically when every nibble maps onto
    /// a doubled-digit byte (`digit × 17`).
    #[test]
    fn test_three_digit_re_encodes_as_doubled_digits() {
        let color = try_parse_hex_color("#F80").unwrap();
        assert_eq2!(color.to_hex_color(false).unwrap().as_str(), "#FF8800");
    }
}
