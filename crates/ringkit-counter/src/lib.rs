//! Round progress counter and scroll indicator geometry
//!
//! Works out where a panel's round counter goes and which tick segments show
//! its progress, and where a list's floating scroll indicator sits next to
//! the scrollbar thumb. Nothing here draws; callers feed the numbers to
//! whatever renderer they use.
//!
//! ```rust
//! use ringkit_counter::{CounterConfig, CounterLayout};
//!
//! let layout = CounterLayout::compute(&CounterConfig::default(), 64).unwrap();
//! let ticks = layout.ticks(3, 12);
//! assert_eq!(ticks.len(), 26);
//! ```

pub mod config;
pub mod error;
pub mod indicator;
pub mod layout;

pub use config::{CounterConfig, DEFAULT_LINE_RATIO};
pub use error::{CounterError, CounterResult};
pub use indicator::{
    child_at, IndicatorUpdate, PanelPlacement, PanelSize, ScrollIndicator, ScrollMetrics, Thumb,
};
pub use layout::{progress_percent, CounterLayout, TickSegment, TICKS_PER_TURN};
