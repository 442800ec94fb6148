//! Sampling side of the dashboard.
//!
//! [`Collector`] pulls one reading from each external data source per pass,
//! appends the trended values to their [`Histories`], and hands back a
//! [`Snapshot`].  Every data source is isolated: a failure turns into a value
//! inside the snapshot and never stops the other readings.

pub mod docker;
pub mod host;
pub mod net;
pub mod units;

pub use docker::{ContainerRuntime, DockerRuntime, StorageUsage};
pub use host::{FsUsage, HostStats, SysinfoHost};
pub use net::{Connection, ConnectionSource, ProcNet, TcpState};

use chrono::Local;
use mon_core::{ContainerInfo, DiskInfo, Histories, Metric, Result, Snapshot, SourceError};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Filesystem whose usage is reported in the disk section.
const ROOT_MOUNT: &str = "/";

const DOCKER_SPACE: &str = "Docker space";
const DOCKER_CONTAINERS: &str = "Docker containers";

/// Runs sampling passes and owns the rolling history of every trended metric.
pub struct Collector<H = SysinfoHost, R = DockerRuntime, N = ProcNet> {
    host:      H,
    runtime:   R,
    net:       N,
    mount:     PathBuf,
    histories: Histories,
}

impl Collector {
    /// Collector wired to `sysinfo`, the local Docker daemon and `/proc/net`.
    pub fn system(history_length: NonZeroUsize) -> Result<Self> {
        Ok(Self::new(
            history_length,
            SysinfoHost::new(),
            DockerRuntime::connect()?,
            ProcNet::new(),
        ))
    }
}

impl<H, R, N> Collector<H, R, N>
where
    H: HostStats,
    R: ContainerRuntime,
    N: ConnectionSource,
{
    pub fn new(history_length: NonZeroUsize, host: H, runtime: R, net: N) -> Self {
        Self {
            host,
            runtime,
            net,
            mount: PathBuf::from(ROOT_MOUNT),
            histories: Histories::new(history_length),
        }
    }

    pub fn histories(&self) -> &Histories {
        &self.histories
    }

    /// Run one full pass in display order and return its snapshot.
    pub fn sample(&mut self) -> Snapshot {
        let time = Local::now();
        let cpu_percent = self.sample_cpu();
        let memory_percent = self.sample_memory();
        let disk = self.sample_disk();
        let docker_space = self.sample_docker_space();
        let containers = self.sample_containers();
        let listening_ports = self.list_listening_ports();

        Snapshot {
            time,
            cpu_percent,
            memory_percent,
            disk,
            docker_space,
            containers,
            listening_ports,
        }
    }

    pub fn sample_cpu(&mut self) -> f64 {
        let percent = self.host.cpu_percent();
        self.histories.append(Metric::Cpu, percent);
        percent
    }

    pub fn sample_memory(&mut self) -> f64 {
        let percent = self.host.memory_percent();
        self.histories.append(Metric::Memory, percent);
        percent
    }

    /// Root filesystem usage.  Only the percentage is kept in history.
    pub fn sample_disk(&mut self) -> DiskInfo {
        let usage = self.host.fs_usage(&self.mount);
        let percent = usage.percent();
        self.histories.append(Metric::Disk, percent);

        DiskInfo {
            total_gb: units::gib(usage.total_bytes),
            free_gb:  units::gib(usage.free_bytes),
            percent,
        }
    }

    /// Total runtime storage (images + volumes + writable layers) in GiB.
    ///
    /// Has no history; a failure leaves every series untouched.
    pub fn sample_docker_space(&mut self) -> std::result::Result<f64, SourceError> {
        match self.runtime.storage_usage() {
            Ok(usage) => Ok(units::gib(usage.total_bytes())),
            Err(e) => {
                debug!("docker storage query failed: {e}");
                Err(SourceError::new(DOCKER_SPACE, e.to_string()))
            }
        }
    }

    /// Running containers.  On failure a `0` is still appended so the trend
    /// keeps one sample per pass.
    pub fn sample_containers(&mut self) -> std::result::Result<ContainerInfo, SourceError> {
        match self.runtime.running_containers() {
            Ok(names) => {
                let info = ContainerInfo::from_names(names);
                self.histories.append(Metric::Containers, info.count as f64);
                Ok(info)
            }
            Err(e) => {
                debug!("docker container query failed: {e}");
                self.histories.append(Metric::Containers, 0.0);
                Err(SourceError::new(DOCKER_CONTAINERS, e.to_string()))
            }
        }
    }

    /// Every listening socket as `"ip:port"`, ascending.
    pub fn list_listening_ports(&self) -> BTreeSet<String> {
        let connections = match self.net.connections() {
            Ok(connections) => connections,
            Err(e) => {
                warn!("cannot enumerate connections: {e}");
                return BTreeSet::new();
            }
        };

        connections
            .into_iter()
            .filter(|c| c.state == TcpState::Listen)
            .map(|c| format!("{}:{}", c.local.ip(), c.local.port()))
            .collect()
    }
}
