//! Scroll indicator placement
//!
//! A list shows a small panel next to its scrollbar thumb, naming the item
//! the thumb currently points at. This module works out the thumb from the
//! list's scroll metrics, finds the child row under the thumb center, and
//! places the panel so it is vertically centered on the thumb.
//!
//! Everything is whole-pixel integer geometry; the thumb follows the usual
//! scrollbar rule of `view_height * extent / range` with a minimum length of
//! twice the scrollbar thickness.

use serde::{Deserialize, Serialize};

use ringkit_geometry::Interval;

use crate::error::{CounterError, CounterResult};

/// Scroll state of a list, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Measured width of the list
    pub view_width: u32,
    /// Measured height of the list
    pub view_height: u32,
    /// Visible portion of the content
    pub extent: u32,
    /// Current scroll position of the content
    pub offset: u32,
    /// Full content size
    pub range: u32,
    /// Width of the vertical scrollbar, also its thickness
    pub scrollbar_width: u32,
}

/// Scrollbar thumb
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumb {
    /// Thumb length after applying the minimum
    pub length: u32,
    /// Distance of the thumb's top from the top of the list
    pub top: i32,
    /// Distance of the thumb's center from the top of the list
    pub center: i32,
}

impl Thumb {
    /// Compute the thumb for `metrics`.
    ///
    /// When the content fits (`range <= extent`) the thumb fills the list and
    /// sits at the top. A zero `range` is [`CounterError::EmptyScrollRange`].
    pub fn compute(metrics: &ScrollMetrics) -> CounterResult<Self> {
        if metrics.range == 0 {
            return Err(CounterError::EmptyScrollRange);
        }

        let height = metrics.view_height as f64;
        let raw_length =
            (height * metrics.extent as f64 / metrics.range as f64).round().min(height);

        // Travel is computed from the unclamped length, then the minimum applies
        let scrollable = metrics.range.saturating_sub(metrics.extent);
        let top = if scrollable == 0 {
            0
        } else {
            ((height - raw_length) * metrics.offset as f64 / scrollable as f64).round() as i32
        };

        let min_length = metrics.scrollbar_width.saturating_mul(2);
        let length = (raw_length as u32).max(min_length);

        Ok(Self {
            length,
            top,
            center: top.saturating_add((length / 2) as i32),
        })
    }
}

/// Size of the indicator panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

/// Where the indicator panel goes, relative to the list's top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPlacement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PanelPlacement {
    /// Panel left of the scrollbar, vertically centered on `thumb_center`
    pub fn beside_thumb(metrics: &ScrollMetrics, panel: PanelSize, thumb_center: i32) -> Self {
        let x = metrics.view_width as i64 - panel.width as i64 - metrics.scrollbar_width as i64;
        Self {
            x: x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            y: thumb_center.saturating_sub((panel.height / 2) as i32),
            width: panel.width,
            height: panel.height,
        }
    }

    /// Vertical span of the panel
    pub fn vertical_span(&self) -> Interval {
        Interval::new(self.y as f64, self.y as f64 + self.height as f64)
    }
}

/// Index of the child whose vertical span strictly contains `y`.
///
/// `children` are the visible rows, top to bottom, as `[top, bottom]`
/// intervals; the returned index is relative to the first of them.
pub fn child_at(children: &[Interval], y: i32) -> Option<usize> {
    children
        .iter()
        .position(|child| child.contains_exclusive(y as f64))
}

/// Result of one scroll step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorUpdate {
    /// The item under the thumb, if it differs from the last one reported
    pub changed_position: Option<usize>,
    pub thumb: Thumb,
    pub panel: PanelPlacement,
}

/// Tracks the item the indicator last pointed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollIndicator {
    last_position: Option<usize>,
}

impl ScrollIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last item reported through [`IndicatorUpdate::changed_position`]
    pub fn last_position(&self) -> Option<usize> {
        self.last_position
    }

    /// Forget the last reported item, e.g. after the list data changes
    pub fn reset(&mut self) {
        self.last_position = None;
    }

    /// Handle a scroll step.
    ///
    /// Returns `None` when there is nothing to point at: an empty list or a
    /// zero scroll range. A position is only reported when it changes; the
    /// panel placement is returned on every step.
    pub fn on_scroll(
        &mut self,
        metrics: &ScrollMetrics,
        panel: PanelSize,
        first_visible: usize,
        total_items: usize,
        children: &[Interval],
    ) -> Option<IndicatorUpdate> {
        if total_items == 0 {
            return None;
        }
        let thumb = match Thumb::compute(metrics) {
            Ok(thumb) => thumb,
            Err(err) => {
                tracing::debug!(%err, "no scroll indicator");
                return None;
            }
        };

        let mut changed_position = None;
        if let Some(index) = child_at(children, thumb.center) {
            let position = first_visible + index;
            if self.last_position != Some(position) {
                tracing::debug!(position, thumb_center = thumb.center, "indicator position changed");
                self.last_position = Some(position);
                changed_position = Some(position);
            }
        }

        Some(IndicatorUpdate {
            changed_position,
            thumb,
            panel: PanelPlacement::beside_thumb(metrics, panel, thumb.center),
        })
    }
}
