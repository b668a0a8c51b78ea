//! Round counter configuration
//!
//! The knobs a panel exposes for its counter. Values usually come from a
//! theme or settings file, so every field has a default and out-of-range
//! ratios are clamped rather than rejected.

use serde::{Deserialize, Serialize};

/// Default fraction of the counter radius left between the rim and the ticks
pub const DEFAULT_LINE_RATIO: f64 = 0.1;

/// Round counter settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Whether the counter is shown at all
    pub enabled: bool,
    /// Counter diameter as a fraction of the panel height, in `[0, 1]`
    pub height_ratio: f64,
    /// Gap in pixels between the counter and the panel text
    pub padding: u32,
    /// Tick opacity in `[0, 1]`
    pub line_alpha: f64,
    /// Inset of the tick start from the rim, as a fraction of the radius
    pub line_ratio: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height_ratio: 1.0,
            padding: 0,
            line_alpha: 1.0,
            line_ratio: DEFAULT_LINE_RATIO,
        }
    }
}

impl CounterConfig {
    /// Copy with `height_ratio` and `line_alpha` clamped into `[0, 1]`.
    ///
    /// Non-finite values fall back to their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            height_ratio: clamp_unit("height_ratio", self.height_ratio, defaults.height_ratio),
            line_alpha: clamp_unit("line_alpha", self.line_alpha, defaults.line_alpha),
            line_ratio: if self.line_ratio.is_finite() {
                self.line_ratio
            } else {
                tracing::warn!(value = self.line_ratio, "line_ratio is not finite, using default");
                defaults.line_ratio
            },
            ..*self
        }
    }

    /// Tick opacity as an 8-bit alpha channel
    pub fn alpha_byte(&self) -> u8 {
        (self.sanitized().line_alpha * 255.0) as u8
    }
}

fn clamp_unit(field: &'static str, value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(field, value, "not finite, using default");
        return default;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        tracing::warn!(field, value, clamped, "clamped into [0, 1]");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CounterConfig::default();
        assert!(config.enabled);
        assert_eq!(config.height_ratio, 1.0);
        assert_eq!(config.padding, 0);
        assert_eq!(config.line_alpha, 1.0);
        assert_eq!(config.line_ratio, DEFAULT_LINE_RATIO);
    }

    #[test]
    fn test_sanitized_clamps_ratios() {
        let config = CounterConfig {
            height_ratio: -0.5,
            line_alpha: 3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.height_ratio, 0.0);
        assert_eq!(config.line_alpha, 1.0);

        let config = CounterConfig {
            height_ratio: 1.5,
            line_alpha: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.height_ratio, 1.0);
        assert_eq!(config.line_alpha, 0.0);
    }

    #[test]
    fn test_sanitized_keeps_in_range_values() {
        let config = CounterConfig {
            enabled: false,
            height_ratio: 0.6,
            padding: 12,
            line_alpha: 0.25,
            line_ratio: 0.2,
        };
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_sanitized_non_finite_uses_defaults() {
        let config = CounterConfig {
            height_ratio: f64::NAN,
            line_alpha: f64::INFINITY,
            line_ratio: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn test_alpha_byte() {
        assert_eq!(CounterConfig::default().alpha_byte(), 255);
        let half = CounterConfig {
            line_alpha: 0.5,
            ..Default::default()
        };
        assert_eq!(half.alpha_byte(), 127);
        let over = CounterConfig {
            line_alpha: 7.0,
            ..Default::default()
        };
        assert_eq!(over.alpha_byte(), 255);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CounterConfig =
            serde_json::from_str(r#"{"height_ratio": 0.5, "padding": 10}"#).unwrap();
        assert_eq!(config.height_ratio, 0.5);
        assert_eq!(config.padding, 10);
        assert!(config.enabled);
        assert_eq!(config.line_alpha, 1.0);
    }
}
