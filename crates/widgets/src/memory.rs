use crate::{line, trend::gauge_with_trend};
use mon_core::{FrameState, Metric, Section};

/// Displays used RAM as a gauge followed by its recent trend.
#[derive(Debug, Default)]
pub struct MemoryWidget;

impl MemoryWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for MemoryWidget {
    fn id(&self) -> &str {
        "memory"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        line(out, "Memory:");
        gauge_with_trend(
            out,
            state,
            state.snapshot.memory_percent,
            Metric::Memory,
            "Last minute trend:",
        );
        line(out, "");
    }
}
