// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Failure kinds for the hex color codec.
//!
//! This is a closed set so calling code can branch on the cause. Decoding surfaces
//! [`InvalidFormat`], [`InvalidLength`] or [`InvalidDigits`]; encoding surfaces
//! [`OutOfGamut`]. All of these are ordinary recoverable results - deterministic for a
//! given input, never worth retrying, never fatal.
//!
//! [`InvalidFormat`]: ColorCodecError::InvalidFormat
//! [`InvalidLength`]: ColorCodecError::InvalidLength
//! [`InvalidDigits`]: ColorCodecError::InvalidDigits
//! [`OutOfGamut`]: ColorCodecError::OutOfGamut

/// Errors from [`try_parse_hex_color`] and [`hex_color_string_from`].
///
/// | Variant           | Cause                                                  |
/// | :---------------- | :----------------------------------------------------- |
/// | [`InvalidFormat`] | Input does not start with the `#` prefix               |
/// | [`InvalidLength`] | Digit count after the prefix is not 3, 4, 6 or 8       |
/// | [`InvalidDigits`] | A character after the prefix is not a hex digit        |
/// | [`OutOfGamut`]    | A channel lies outside `[0.0, 1.0]` when encoding      |
///
/// [`try_parse_hex_color`]: crate::try_parse_hex_color
/// [`hex_color_string_from`]: crate::hex_color_string_from
/// [`InvalidFormat`]: Self::InvalidFormat
/// [`InvalidLength`]: Self::InvalidLength
/// [`InvalidDigits`]: Self::InvalidDigits
/// [`OutOfGamut`]: Self::OutOfGamut
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorCodecError {
    /// Input string lacks the leading `#` prefix marker.
    #[error("hex color is missing the leading '#' prefix")]
    #[diagnostic(
        code(swatch::color::invalid_format),
        help("prefix the digits with '#', e.g. \"#FF8000\"")
    )]
    InvalidFormat,

    /// Digit count after the prefix is not one of the four fixed-width forms.
    #[error("hex color has {found} digits after '#'; expected 3, 4, 6 or 8")]
    #[diagnostic(
        code(swatch::color::invalid_length),
        help(
            "use #RGB, #RGBA, #RRGGBB or #RRGGBBAA, \
             e.g. \"#F80\" or \"#FF8800\""
        )
    )]
    InvalidLength { found: usize },

    /// Non-hexadecimal characters present after the prefix.
    #[error("hex color contains characters that are not hexadecimal digits")]
    #[diagnostic(
        code(swatch::color::invalid_digits),
        help("only 0-9, a-f and A-F are allowed after the '#'")
    )]
    InvalidDigits,

    /// A channel value can not be expressed in the simple RGB model. Guards against
    /// wide-gamut color spaces whose normalized components leave `[0.0, 1.0]`.
    #[error("channel {channel} value {value} is outside the encodable range [0.0, 1.0]")]
    #[diagnostic(
        code(swatch::color::out_of_gamut),
        help("clamp the channel into [0.0, 1.0] before encoding")
    )]
    OutOfGamut { channel: &'static str, value: f64 },
}
