//! Value-to-color mapping for sensor readings.
//!
//! Every sensor channel owns one [`ColorCalculator`] mapping its reading
//! onto a red/blue ramp:
//!
//! ```text
//! min ──────────── mid ──────────── max
//! full blue ─ fade ─ black ─ fade ─ full red
//! ```
//!
//! Readings below the midpoint glow blue, readings above glow red, both
//! fading to black near the middle of the range. Reversed polarity flips the
//! ends, for channels where a high reading should not read as alarming
//! (humidity, for example).
//!
//! # Stability
//!
//! Sensor noise makes consecutive readings jitter by fractions of a unit.
//! The calculator caches the last computed color and returns it unchanged
//! while the reading stays within [`STABILITY_EPSILON`] of the value it was
//! computed for, so the matrix does not flicker. The cached anchor value
//! only moves when a reading escapes the epsilon window.
//!
//! Each (view, axis) pair owns its own calculator instance; sharing one
//! across channels would corrupt the cached anchor.

use embedded_graphics::pixelcolor::Rgb888;

use crate::config::STABILITY_EPSILON;
use crate::error::ConfigError;

/// All channels off.
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);

/// All channels full. Used for the status indicator, never by the ramp.
pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);

/// Maps a scalar reading within a configured range to an [`Rgb888`] color.
///
/// Not `Clone`: the stability anchor belongs to exactly one signal.
/// Construct one calculator per channel from the shared range parameters.
#[derive(Debug)]
pub struct ColorCalculator {
    min_value: f32,
    range_width: f32,
    reverse: bool,
    /// Reading the cached color was computed for, with that color.
    /// Set together, only inside [`ColorCalculator::compute`].
    last: Option<(f32, Rgb888)>,
}

impl ColorCalculator {
    /// Create a calculator for readings in `min..=max`.
    ///
    /// `reverse` flips which end of the range reads as hot (red). Fails with
    /// [`ConfigError::EmptyRange`] unless `max > min` with finite bounds.
    pub fn new(min: f32, max: f32, reverse: bool) -> Result<Self, ConfigError> {
        let width = max - min;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::EmptyRange { min, max });
        }
        Ok(Self {
            min_value: min,
            range_width: width,
            reverse,
            last: None,
        })
    }

    /// Compute the color for a reading.
    ///
    /// Returns the cached color untouched while the reading stays within
    /// [`STABILITY_EPSILON`] of the previously computed one.
    pub fn compute(&mut self, value: f32) -> Rgb888 {
        if let Some((previous, color)) = self.last
            && (previous - value).abs() < STABILITY_EPSILON
        {
            return color;
        }

        let score = self.score(value);
        let saturation = Self::saturation(score);
        let color = if (score > 0.5) != self.reverse {
            Rgb888::new(saturation, 0, 0)
        } else {
            Rgb888::new(0, 0, saturation)
        };

        self.last = Some((value, color));
        color
    }

    /// Normalized position of the reading above the range floor, clamped to
    /// `0.0..=1.0`. Readings at or below `min` score 0, readings at or
    /// beyond `max` score 1.
    fn score(&self, value: f32) -> f32 {
        if value <= self.min_value {
            0.0
        } else {
            ((value - self.min_value) / self.range_width).min(1.0)
        }
    }

    /// Two-sided saturation ramp centered on score 0.5:
    /// 255 at either end of the range, 0 exactly at the midpoint.
    fn saturation(score: f32) -> u8 {
        let ramp = if score > 0.5 {
            2.0f32.mul_add(score, -1.0)
        } else {
            (-2.0f32).mul_add(score, 1.0)
        };
        (255.0 * ramp).round() as u8
    }
}
