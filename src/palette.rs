//! The fixed five-color palette shared by the renderer and the overlay.

use image::Rgba;
use rand::Rng;

/// Escape colors, in palette order: red, gold, blue-violet, spring green, pink.
pub const PALETTE: [Rgba<u8>; 5] = [
    Rgba([255, 69, 0, 255]),
    Rgba([255, 215, 0, 255]),
    Rgba([138, 43, 226, 255]),
    Rgba([0, 255, 127, 255]),
    Rgba([255, 20, 147, 255]),
];

/// Color of pixels that never escape.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Annotation mark color.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pick one palette entry uniformly at random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba<u8> {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}
