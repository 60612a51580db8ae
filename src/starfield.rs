//! Decorative sky: the twinkling star field behind the hero section
//! and the date-seeded sky dome shown after a reveal.
//!
//! Nothing here uses an RNG. Star attributes are derived from a hash
//! of the star index, and the dome is a pure function of the selected
//! date, so redraws never flicker and tests can pin the output.

use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};

pub const STAR_COUNT: usize = 50;
pub const SKY_POINT_COUNT: usize = 20;

/// Ticks per full twinkle cycle (at ~100 ms per tick, ~3 s).
pub const TWINKLE_PERIOD: u64 = 30;

// "STAR" in ASCII; any fixed value works, it only decorrelates the
// field from the date-seeded dome.
const FIELD_SEED: u64 = 0x5354_4152;

fn mix(seed: u64, index: usize) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    seed.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Fraction in [0, 1) from the low bits of a hash.
fn unit(hash: u64) -> f64 {
    (hash % 10_000) as f64 / 10_000.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position as a fraction of the render area.
    pub x: f64,
    /// Vertical position as a fraction of the render area.
    pub y: f64,
    /// Size class 1..=3; bigger stars get brighter glyphs.
    pub size: u8,
    /// Twinkle offset in ticks, so the field doesn't pulse in unison.
    pub phase: u64,
}

/// The fixed background star field.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new() -> Self {
        let stars = (0..STAR_COUNT)
            .map(|i| {
                let h = mix(FIELD_SEED, i);
                Star {
                    x: unit(h),
                    y: unit(h >> 16),
                    size: 1 + ((h >> 32) % 3) as u8,
                    phase: (h >> 40) % TWINKLE_PERIOD,
                }
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Brightness bucket for `star` at animation tick `tick`:
    /// 0 = dim, 1 = normal, 2 = bright.
    pub fn brightness(star: &Star, tick: u64) -> u8 {
        let t = (tick + star.phase) % TWINKLE_PERIOD;
        match t {
            0..=4 => 2,
            5..=14 => 1,
            _ => 0,
        }
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}

/// The stylized sky dome for a selected date: constellation points, a
/// central bright star, and a few faint connecting lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyMap {
    date: NaiveDate,
    points: Vec<(f64, f64)>,
}

impl SkyMap {
    pub fn for_date(date: NaiveDate) -> Self {
        let seed = date.num_days_from_ce() as u64;
        let points = (0..SKY_POINT_COUNT)
            .map(|i| {
                let h = mix(seed, i);
                // Keep points off the rim: 10% - 90% of the dome.
                let x = 0.10 + unit(h) * 0.80;
                let y = 0.10 + unit(h >> 16) * 0.80;
                (x, y)
            })
            .collect();
        Self { date, points }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The central bright star.
    pub fn center(&self) -> (f64, f64) {
        (0.5, 0.5)
    }

    /// Faint constellation lines drawn across the dome.
    pub fn lines(&self) -> [((f64, f64), (f64, f64)); 3] {
        [
            ((0.30, 0.30), (0.70, 0.40)),
            ((0.70, 0.40), (0.60, 0.70)),
            ((0.20, 0.60), (0.40, 0.80)),
        ]
    }
}

#[cfg(feature = "tui")]
pub use widget::StarFieldWidget;

#[cfg(feature = "tui")]
mod widget {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    use super::{Star, StarField};
    use crate::color_utils;

    /// Paints the star field into its area; lays under the hero text,
    /// so it only touches cells that are still blank.
    pub struct StarFieldWidget<'a> {
        pub field: &'a StarField,
        pub tick: u64,
    }

    fn glyph(star: &Star, brightness: u8) -> char {
        match (star.size, brightness) {
            (_, 0) => '·',
            (1, _) => '·',
            (2, 1) => '+',
            (2, 2) => '✦',
            (3, 1) => '✦',
            (3, 2) => '★',
            _ => '·',
        }
    }

    impl Widget for StarFieldWidget<'_> {
        fn render(self, area: Rect, buf: &mut Buffer) {
            if area.width == 0 || area.height == 0 {
                return;
            }
            for (i, star) in self.field.stars().iter().enumerate() {
                let x = area.x + (star.x * f64::from(area.width - 1)).round() as u16;
                let y = area.y + (star.y * f64::from(area.height - 1)).round() as u16;
                let brightness = StarField::brightness(star, self.tick);
                let color = match brightness {
                    0 => Color::DarkGray,
                    1 => {
                        let (r, g, b) = color_utils::star_tint(i);
                        Color::Rgb(
                            (r * 255.0) as u8,
                            (g * 255.0) as u8,
                            (b * 255.0) as u8,
                        )
                    }
                    _ => Color::White,
                };
                let cell = &mut buf[(x, y)];
                if cell.symbol() == " " {
                    cell.set_char(glyph(star, brightness)).set_fg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_field_is_deterministic() {
        assert_eq!(StarField::new(), StarField::new());
    }

    #[test]
    fn star_field_has_fifty_stars_in_bounds() {
        let field = StarField::new();
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!((0.0..1.0).contains(&star.x));
            assert!((0.0..1.0).contains(&star.y));
            assert!((1..=3).contains(&star.size));
            assert!(star.phase < TWINKLE_PERIOD);
        }
    }

    #[test]
    fn brightness_cycles_through_all_buckets() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            size: 2,
            phase: 0,
        };
        let buckets: std::collections::HashSet<u8> =
            (0..TWINKLE_PERIOD).map(|t| StarField::brightness(&star, t)).collect();
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn sky_map_is_stable_per_date() {
        let date = NaiveDate::from_ymd_opt(2020, 8, 20).unwrap();
        assert_eq!(SkyMap::for_date(date), SkyMap::for_date(date));
    }

    #[test]
    fn sky_map_points_stay_off_the_rim() {
        let date = NaiveDate::from_ymd_opt(1203, 3, 10).unwrap();
        let map = SkyMap::for_date(date);
        assert_eq!(map.points().len(), SKY_POINT_COUNT);
        for &(x, y) in map.points() {
            assert!((0.10..=0.90).contains(&x));
            assert!((0.10..=0.90).contains(&y));
        }
    }
}
