//! Frame composition for the dashboard.
//!
//! The section order is fixed: header, CPU, memory, disk, docker storage,
//! containers, ports.  It matches the order in which the collector samples.

use mon_config::MonitorConfig;
use mon_core::{FrameState, Histories, Result, Section, Snapshot};
use mon_widgets::{
    ContainersWidget, CpuWidget, DiskWidget, HeaderWidget, MemoryWidget, PortsWidget,
    StorageWidget,
};
use std::num::NonZeroUsize;

/// The composed text of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame(String);

impl RenderedFrame {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders every section into a single frame.
#[derive(Debug)]
pub struct FrameRenderer {
    sections: Vec<Box<dyn Section>>,
    width:    NonZeroUsize,
}

impl FrameRenderer {
    pub fn new(width: NonZeroUsize) -> Self {
        Self {
            sections: vec![
                Box::new(HeaderWidget::new()),
                Box::new(CpuWidget::new()),
                Box::new(MemoryWidget::new()),
                Box::new(DiskWidget::new()),
                Box::new(StorageWidget::new()),
                Box::new(ContainersWidget::new()),
                Box::new(PortsWidget::new()),
            ],
            width,
        }
    }

    /// Build a [`FrameRenderer`] from the loaded configuration.
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        Ok(Self::new(config.width()?))
    }

    pub fn render(&self, snapshot: &Snapshot, histories: &Histories) -> RenderedFrame {
        let state = FrameState {
            snapshot,
            histories,
            width: self.width,
        };

        let mut out = String::new();
        for section in &self.sections {
            section.render(&state, &mut out);
        }
        RenderedFrame(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mon_core::{Metric, MonError};
    use mon_system::{
        Collector, Connection, ConnectionSource, ContainerRuntime, FsUsage, HostStats,
        StorageUsage, TcpState,
    };
    use std::collections::VecDeque;
    use std::path::Path;

    struct ScriptedHost {
        cpu: VecDeque<f64>,
    }

    impl HostStats for ScriptedHost {
        fn cpu_percent(&mut self) -> f64 {
            self.cpu.pop_front().unwrap_or(0.0)
        }

        fn memory_percent(&mut self) -> f64 {
            50.0
        }

        fn fs_usage(&mut self, _mount: &Path) -> FsUsage {
            FsUsage {
                total_bytes: 10 << 30,
                used_bytes:  5 << 30,
                free_bytes:  5 << 30,
            }
        }
    }

    struct NoDaemon;

    impl ContainerRuntime for NoDaemon {
        fn storage_usage(&self) -> Result<StorageUsage> {
            Err(MonError::Runtime("connection refused".into()))
        }

        fn running_containers(&self) -> Result<Vec<String>> {
            Err(MonError::Runtime("connection refused".into()))
        }
    }

    struct OneListener;

    impl ConnectionSource for OneListener {
        fn connections(&self) -> Result<Vec<Connection>> {
            Ok(vec![Connection {
                local: "0.0.0.0:22".parse().unwrap(),
                state: TcpState::Listen,
            }])
        }
    }

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn sections_in_sampling_order() {
        let renderer = FrameRenderer::new(width(30));
        let ids: Vec<&str> = renderer.sections.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["header", "cpu", "memory", "disk", "docker-storage", "docker-containers", "ports"]
        );
    }

    #[test]
    fn zero_width_config_is_rejected() {
        let config = MonitorConfig { width: 0, ..MonitorConfig::default() };
        assert!(matches!(FrameRenderer::from_config(&config), Err(MonError::InvalidArgument(_))));
    }

    #[test]
    fn five_passes_with_history_three() {
        let host = ScriptedHost {
            cpu: VecDeque::from([10.0, 20.0, 30.0, 40.0, 50.0]),
        };
        let mut collector = Collector::new(width(3), host, NoDaemon, OneListener);
        let renderer = FrameRenderer::new(width(5));

        let mut frame = None;
        for _ in 0..5 {
            let snapshot = collector.sample();
            frame = Some(renderer.render(&snapshot, collector.histories()));
        }

        let cpu = collector.histories().get(Metric::Cpu);
        assert_eq!(cpu.values(), vec![30.0, 40.0, 50.0]);
        assert_eq!(mon_widgets::sparkline::render(&cpu.values(), width(5)), "▁▄█");

        let frame = frame.unwrap();
        let text = frame.as_str();
        assert!(text.contains("CPU Usage:\n[██░░░] 50.0%\nLast minute trend:\n▁▄█\n"));
        assert!(text.contains("Docker Storage:\nDocker space error: connection refused\n"));
        assert!(text.contains("Docker Containers (0):\nContainer count trend:\n▅▅▅\n"));
        assert!(text.contains("- Docker containers error: connection refused\n"));
        assert!(text.ends_with("Used Network Ports (1):\n- 0.0.0.0:22\n"));
    }
}
