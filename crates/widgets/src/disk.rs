use crate::{line, trend::gauge_with_trend};
use mon_core::{FrameState, Metric, Section};

/// Displays root filesystem usage: free/total, a gauge, and the usage trend.
#[derive(Debug, Default)]
pub struct DiskWidget;

impl DiskWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for DiskWidget {
    fn id(&self) -> &str {
        "disk"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        let disk = state.snapshot.disk;

        line(out, "Disk:");
        line(out, format!("Free: {:.1}GB of {:.1}GB", disk.free_gb, disk.total_gb));
        gauge_with_trend(out, state, disk.percent, Metric::Disk, "Usage trend:");
        line(out, "");
    }
}
