// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Random color generation.

use rand::{Rng, rngs::ThreadRng};

use crate::RgbaValue;

/// Generates a fully opaque color with red, green and blue drawn independently and
/// uniformly from the half-open byte range `0..255`.
///
/// Note the half-open bound: a channel never reaches 255, so the brightest level of
/// each primary is unreachable. Callers that need the full byte range should construct
/// the color from [`RgbaValue::from_u8`] with their own draws.
#[must_use]
pub fn generate_random_color() -> RgbaValue {
    let mut rng: ThreadRng = rand::rng();

    RgbaValue::from_u8(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_is_opaque_and_inside_the_draw_range() {
        for _ in 0..1000 {
            let color = generate_random_color();
            assert!(color.is_opaque());
            assert!(color.is_in_gamut());
            // Half-open draw: 255 is never produced.
            assert!(color.red_byte() <= 254);
            assert!(color.green_byte() <= 254);
            assert!(color.blue_byte() <= 254);
        }
    }
}
