//! Post-render flare: random speckle clusters and one annotation mark.

use image::Rgba;
use rand::Rng;

use crate::canvas::Canvas;
use crate::palette;

/// Built-in annotation phrases; an oracle-provided phrase joins them as the
/// fifth candidate each run.
pub const FIXED_PHRASES: [&str; 4] = ["Fnord!", "Kallisti!", "Ewige Blumenkraft", "Hail Eris!"];

const SPECKLE_CLUSTERS: usize = 5;
const SPECKLE_POINTS: usize = 50;
const SPECKLE_SPREAD: i64 = 10;

/// Placement box reserved for the annotation so it never starts too close
/// to the right or bottom edge.
const TEXT_BOX_WIDTH: u32 = 100;
const TEXT_BOX_HEIGHT: u32 = 50;

/// Pluggable annotation renderer, so the fidelity of text placement can be
/// raised without restructuring the overlay.
pub trait MarkRenderer {
    /// Place a mark for `text` with its origin at (x, y) in `color`.
    fn place_mark(&self, canvas: &mut Canvas, text: &str, x: u32, y: u32, color: Rgba<u8>);
}

/// Stand-in text renderer: plots a fixed-length horizontal run of pixels at
/// the origin and logs the would-be text to stdout. Not glyph rendering.
pub struct PlaceholderLineMark;

/// Length of the placeholder run, independent of the text content.
const MARK_RUN: u32 = 50;

impl MarkRenderer for PlaceholderLineMark {
    fn place_mark(&self, canvas: &mut Canvas, text: &str, x: u32, y: u32, color: Rgba<u8>) {
        println!("Drawing text '{}' at ({}, {})", text, x, y);
        for i in 0..MARK_RUN {
            canvas.stamp(i64::from(x) + i64::from(i), i64::from(y), color);
        }
    }
}

/// Stamp 5 random speckle clusters, then one annotation chosen uniformly
/// from the four fixed phrases plus `phrase`.
pub fn add_flare<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    phrase: &str,
    rng: &mut R,
    mark: &dyn MarkRenderer,
) {
    for _ in 0..SPECKLE_CLUSTERS {
        let x = rng.gen_range(0..canvas.width()) as i64;
        let y = rng.gen_range(0..canvas.height()) as i64;
        let color = palette::random_color(rng);
        speckle_cluster(canvas, x, y, color, rng);
    }

    let annotation = choose_annotation(phrase, rng);
    let x = rng.gen_range(0..canvas.width() - TEXT_BOX_WIDTH);
    let y = rng.gen_range(0..canvas.height() - TEXT_BOX_HEIGHT);
    log::debug!("annotation '{annotation}' placed at ({x}, {y})");
    mark.place_mark(canvas, annotation, x, y, palette::WHITE);
}

/// One cluster: 50 points at independent offsets in [-10, +10]^2 around the
/// anchor. Offsets landing off the image are skipped.
fn speckle_cluster<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    x: i64,
    y: i64,
    color: Rgba<u8>,
    rng: &mut R,
) {
    for _ in 0..SPECKLE_POINTS {
        let dx = rng.gen_range(-SPECKLE_SPREAD..=SPECKLE_SPREAD);
        let dy = rng.gen_range(-SPECKLE_SPREAD..=SPECKLE_SPREAD);
        canvas.stamp(x + dx, y + dy, color);
    }
}

fn choose_annotation<'a, R: Rng + ?Sized>(phrase: &'a str, rng: &mut R) -> &'a str {
    let idx = rng.gen_range(0..FIXED_PHRASES.len() + 1);
    if idx < FIXED_PHRASES.len() {
        FIXED_PHRASES[idx]
    } else {
        phrase
    }
}
