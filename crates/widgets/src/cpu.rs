use crate::{line, trend::gauge_with_trend};
use mon_core::{FrameState, Metric, Section};

/// Displays average CPU usage as a gauge followed by its recent trend.
#[derive(Debug, Default)]
pub struct CpuWidget;

impl CpuWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for CpuWidget {
    fn id(&self) -> &str {
        "cpu"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        line(out, "CPU Usage:");
        gauge_with_trend(out, state, state.snapshot.cpu_percent, Metric::Cpu, "Last minute trend:");
        line(out, "");
    }
}
