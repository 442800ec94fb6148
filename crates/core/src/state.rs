use crate::error::SourceError;
use crate::history::Histories;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Everything a single sampling pass produced.
///
/// Built once per tick, rendered, then dropped.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Local wall-clock time at the start of the pass.
    pub time: DateTime<Local>,
    /// Average CPU usage across all cores (0.0 – 100.0).
    pub cpu_percent: f64,
    /// Used memory as a percentage of total (0.0 – 100.0).
    pub memory_percent: f64,
    /// Root filesystem usage.
    pub disk: DiskInfo,
    /// Space used by the container runtime, in GiB.
    pub docker_space: Result<f64, SourceError>,
    /// Currently running containers.
    pub containers: Result<ContainerInfo, SourceError>,
    /// Listening sockets as `"ip:port"`, ascending.
    pub listening_ports: BTreeSet<String>,
}

/// Point-in-time usage of one filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskInfo {
    pub total_gb: f64,
    pub free_gb:  f64,
    pub percent:  f64,
}

/// Running containers reported by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerInfo {
    pub count: usize,
    pub names: Vec<String>,
}

impl ContainerInfo {
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            count: names.len(),
            names,
        }
    }
}

/// Read-only view handed to every section while a frame is composed.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    pub snapshot:  &'a Snapshot,
    pub histories: &'a Histories,
    /// Width in cells of every gauge and sparkline.
    pub width:     NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_info_counts_names() {
        let info = ContainerInfo::from_names(vec!["web".into(), "db".into()]);
        assert_eq!(info.count, 2);
        assert_eq!(info.names, ["web", "db"]);
    }
}
