// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use swatch::{AngleUnitConversion,
             GraphemeAccess,
             RandomElementPick,
             RgbaValue,
             SafeElementAccess,
             SafeSubslice,
             generate_random_color};

fn main() {
    // Decode and re-encode hex colors.
    {
        let color = RgbaValue::try_from_hex_color("#2F14DF").unwrap();
        println!(
            "#2F14DF decodes to r={r} g={g} b={b}",
            r = color.red_byte(),
            g = color.green_byte(),
            b = color.blue_byte()
        );
        println!("...and re-encodes as {}", color.to_hex_color(false).unwrap());

        let short = RgbaValue::try_from_hex_color("#F80").unwrap();
        println!("#F80 expands to {}", short.to_hex_color(false).unwrap());

        let fallback = RgbaValue::default();
        let color = RgbaValue::from_hex_color_or("not-a-color", fallback);
        println!(
            "\"not-a-color\" falls back to {}",
            color.to_hex_color(false).unwrap()
        );
    }

    // Show each decode failure kind.
    {
        for input in ["FF0000", "#12345", "#GGGGGG"] {
            match RgbaValue::try_from_hex_color(input) {
                Ok(color) => println!("{input} -> {color:?}"),
                Err(error) => println!("{input} -> {error}"),
            }
        }
    }

    // Generate a few random colors.
    {
        for _ in 0..3 {
            let color = generate_random_color();
            println!("random color: {}", color.to_hex_color(false).unwrap());
        }
    }

    // Bounds-safe element and range access.
    {
        let xs = [1, 2, 3, 4, 5];
        println!("xs.element_at(2)  = {:?}", xs.element_at(2));
        println!("xs.element_at(10) = {:?}", xs.element_at(10));
        println!("xs.element_at(-1) = {:?}", xs.element_at(-1));
        println!("xs.subslice(1..4) = {:?}", xs.subslice(1..4));
        println!("random member     = {:?}", xs.random_element().unwrap());

        let mut ys = [1, 2, 3, 4, 5];
        ys.swap_safe(3, 0);
        println!("after swap_safe(3, 0): {ys:?}");
    }

    // Grapheme-cluster-indexed substrings.
    {
        let text = "Hello World!";
        println!("graphemes 6..11 of {text:?} = {:?}", text.grapheme_range(6..11));
        println!("graphemes 21..110 -> {:?}", text.grapheme_range(21..110));
    }

    // Angle conversions.
    {
        println!("180° = {} rad", 180.0_f64.degrees_to_radians());
        println!("90°  = {} rad (from an integer)", 90_i32.degrees_to_radians());
    }
}
