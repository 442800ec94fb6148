use bollard::container::ListContainersOptions;
use bollard::models::SystemDataUsageResponse;
use bollard::Docker;
use mon_core::{MonError, Result};
use tokio::runtime::{Builder, Runtime};

/// Bytes consumed by the container runtime, split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageUsage {
    pub images_bytes:     u64,
    pub volumes_bytes:    u64,
    /// Writable layers of all containers.
    pub containers_bytes: u64,
}

impl StorageUsage {
    pub fn total_bytes(&self) -> u64 {
        self.images_bytes + self.volumes_bytes + self.containers_bytes
    }
}

/// A container runtime that can report storage and running containers.
///
/// Connectivity and API failures come back as [`MonError::Runtime`]; they
/// must never panic the caller.
pub trait ContainerRuntime {
    fn storage_usage(&self) -> Result<StorageUsage>;

    /// Names of the currently running containers.
    fn running_containers(&self) -> Result<Vec<String>>;
}

/// [`ContainerRuntime`] backed by the Docker Engine API.
///
/// `bollard` is async; each call is driven to completion on a private
/// current-thread runtime so the dashboard loop stays synchronous.
pub struct DockerRuntime {
    client:  std::result::Result<Docker, String>,
    runtime: Runtime,
}

impl DockerRuntime {
    /// Connect using the local defaults (`DOCKER_HOST` or the platform socket).
    ///
    /// A client that cannot be constructed is not fatal: every later call
    /// reports the reason instead.
    pub fn connect() -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let client = {
            let _guard = runtime.enter();
            Docker::connect_with_local_defaults().map_err(|e| {
                tracing::warn!("Docker client unavailable: {e}");
                e.to_string()
            })
        };
        Ok(Self { client, runtime })
    }

    fn client(&self) -> Result<&Docker> {
        self.client
            .as_ref()
            .map_err(|reason| MonError::Runtime(reason.clone()))
    }
}

impl ContainerRuntime for DockerRuntime {
    fn storage_usage(&self) -> Result<StorageUsage> {
        let docker = self.client()?;
        let usage = self
            .runtime
            .block_on(docker.df())
            .map_err(|e| MonError::Runtime(e.to_string()))?;
        Ok(summarize_usage(&usage))
    }

    fn running_containers(&self) -> Result<Vec<String>> {
        let docker = self.client()?;
        let options = ListContainersOptions::<String> {
            all: false,
            ..Default::default()
        };
        let containers = self
            .runtime
            .block_on(docker.list_containers(Some(options)))
            .map_err(|e| MonError::Runtime(e.to_string()))?;

        Ok(containers
            .into_iter()
            .map(|c| {
                let name = c.names.and_then(|names| names.into_iter().next());
                match name {
                    Some(name) => container_name(&name),
                    None => c.id.unwrap_or_default().chars().take(12).collect(),
                }
            })
            .collect())
    }
}

/// Docker reports `-1` for sizes it has not computed; those count as zero.
fn known_size(size: i64) -> u64 {
    u64::try_from(size).unwrap_or(0)
}

fn summarize_usage(usage: &SystemDataUsageResponse) -> StorageUsage {
    let images_bytes = usage
        .images
        .iter()
        .flatten()
        .map(|image| known_size(image.size))
        .sum();

    let volumes_bytes = usage
        .volumes
        .iter()
        .flatten()
        .filter_map(|volume| volume.usage_data.as_ref())
        .map(|data| known_size(data.size))
        .sum();

    let containers_bytes = usage
        .containers
        .iter()
        .flatten()
        .filter_map(|container| container.size_rw)
        .map(known_size)
        .sum();

    StorageUsage {
        images_bytes,
        volumes_bytes,
        containers_bytes,
    }
}

/// The API lists names with a leading `/`; the CLI shows them without.
fn container_name(raw: &str) -> String {
    raw.trim_start_matches('/').to_string()
}
