// File: src/color_utils.rs
use std::hash::{Hash, Hasher};

use crate::model::EventCategory;

/// Badge background for an event category, as (r, g, b) in [0.0, 1.0].
/// Fixed palette: a three-entry catalog doesn't need hashed hues, and
/// the badges should read the same on every run.
pub fn category_color(category: EventCategory) -> (f32, f32, f32) {
    match category {
        // Deep violet for the moments the sky goes dark.
        EventCategory::Eclipse => hsl_to_rgb(268.0, 0.55, 0.70),
        // Warm gold for planets in concert.
        EventCategory::PlanetaryAlignment => hsl_to_rgb(46.0, 0.75, 0.65),
        // Cool cyan for falling ice and dust.
        EventCategory::MeteorShower => hsl_to_rgb(190.0, 0.60, 0.70),
    }
}

/// Deterministic pale tint for star `index`, as (r, g, b) in [0.0, 1.0].
/// Hashing the index keeps the field stable across frames without an
/// RNG; saturation stays low and lightness high so every star still
/// reads as "white-ish" against a dark sky.
pub fn star_tint(index: usize) -> (f32, f32, f32) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    index.hash(&mut hasher);
    let hash = hasher.finish();

    // Hue: 0-360 degrees (primary differentiator)
    let h = (hash % 360) as f32;

    // Use different bits of the hash for S and L to avoid correlation with Hue
    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation: 10% - 35%, barely-there color
    let s = 0.10 + ((hash_s % 26) as f32 / 100.0);

    // Lightness: 70% - 95%, near-white
    let l = 0.70 + ((hash_l % 26) as f32 / 100.0);

    hsl_to_rgb(h, s, l)
}

/// Helper: HSL to RGB conversion
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Determines if text on top of this color should be white.
/// Badge colors are bright, so this usually answers "use black text".
pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}
