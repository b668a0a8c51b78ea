//! Counter sizing and tick-mark segments
//!
//! The counter sits at the left edge of its panel, vertically centered. Its
//! progress is drawn as a fan of ticks from the center, one per percent,
//! each the previous one turned by a hundredth of a full turn.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use ringkit_geometry::Vector2;

use crate::config::CounterConfig;
use crate::error::{CounterError, CounterResult};

/// Ticks in one full turn of the counter
pub const TICKS_PER_TURN: u32 = 100;

/// A straight segment from the counter center outwards
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickSegment {
    pub from: Vector2,
    pub to: Vector2,
}

impl TickSegment {
    pub fn length(&self) -> f64 {
        self.from.difference_to(self.to).length()
    }
}

/// Pixel geometry of a counter placed in a panel.
///
/// Sizes use whole-pixel integer arithmetic so the counter lines up with the
/// panel's own layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterLayout {
    /// Counter radius in pixels
    pub radius: u32,
    /// Pivot of every tick
    pub center: Vector2,
    /// Outer end of the un-rotated first tick
    pub tick_start: Vector2,
    /// Left padding the panel must add to keep its text clear of the counter
    pub extra_padding: u32,
}

impl CounterLayout {
    /// Size a counter for a panel of `panel_height` pixels.
    ///
    /// Returns `None` when the counter is disabled.
    pub fn compute(config: &CounterConfig, panel_height: u32) -> Option<Self> {
        let config = config.sanitized();
        if !config.enabled {
            return None;
        }

        let radius = (panel_height as f64 * config.height_ratio) as u32 / 2;
        let line_inset = (radius as f64 * config.line_ratio) as u32;
        let mid_y = (panel_height / 2) as f64;

        let layout = Self {
            radius,
            center: Vector2::new(radius as f64, mid_y),
            tick_start: Vector2::new((radius / 2 + line_inset) as f64, mid_y),
            extra_padding: radius + config.padding,
        };
        tracing::debug!(
            panel_height,
            radius,
            line_inset,
            extra_padding = layout.extra_padding,
            "counter layout computed"
        );
        Some(layout)
    }

    /// Length of every tick
    pub fn tick_length(&self) -> f64 {
        self.center.difference_to(self.tick_start).length()
    }

    /// The tick turned to index `i`
    pub fn tick(&self, i: u32) -> TickSegment {
        let angle = i as f64 * TAU / TICKS_PER_TURN as f64;
        TickSegment {
            from: self.center,
            to: self.tick_start.rotate(self.center, angle),
        }
    }

    /// All ticks for `position` out of `total`.
    ///
    /// The un-rotated base tick comes first, followed by one tick for every
    /// index below the percentage. An empty `total` draws nothing. A
    /// `position` past `total` draws a single full turn.
    pub fn ticks(&self, position: u32, total: u32) -> Vec<TickSegment> {
        let Ok(percent) = progress_percent(position, total) else {
            return Vec::new();
        };
        if percent > 100.0 {
            tracing::debug!(position, total, "position past total, drawing a full turn");
        }

        let count = percent.min(100.0).ceil() as u32;
        let mut ticks = Vec::with_capacity(count as usize + 1);
        ticks.push(TickSegment {
            from: self.center,
            to: self.tick_start,
        });
        ticks.extend((0..count).map(|i| self.tick(i)));
        ticks
    }
}

/// Progress as a percentage, `position / total * 100`.
///
/// Multiplies before dividing so whole percentages come out exact.
/// Not clamped: a `position` past `total` gives more than 100.
pub fn progress_percent(position: u32, total: u32) -> CounterResult<f64> {
    if total == 0 {
        return Err(CounterError::EmptyTotal);
    }
    Ok(position as f64 * 100.0 / total as f64)
}
