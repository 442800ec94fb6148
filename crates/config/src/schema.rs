use mon_core::{MonError, Result, DEFAULT_HISTORY_LENGTH};
use serde::Deserialize;
use std::num::NonZeroUsize;

/// Default width in cells of every gauge and sparkline.
pub const DEFAULT_WIDTH: usize = 30;

/// Root configuration structure parsed from `sysmon.toml`.
///
/// Only the shape of the display is configurable; which metrics are tracked
/// and how often they are sampled is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Samples kept per trend series.
    pub history_length: usize,
    /// Gauge and sparkline width in terminal cells.
    pub width: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            history_length: DEFAULT_HISTORY_LENGTH.get(),
            width:          DEFAULT_WIDTH,
        }
    }
}

impl MonitorConfig {
    /// Reject zero sizes, which no series or glyph row can honour.
    pub fn validate(&self) -> Result<()> {
        self.history_length()?;
        self.width()?;
        Ok(())
    }

    pub fn history_length(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.history_length).ok_or_else(|| {
            MonError::InvalidArgument("history_length must be at least 1".into())
        })
    }

    pub fn width(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.width)
            .ok_or_else(|| MonError::InvalidArgument("width must be at least 1".into()))
    }
}
