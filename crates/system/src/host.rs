use crate::units::used_percent;
use std::path::Path;
use sysinfo::{Disks, System};

/// Raw byte counts for one filesystem.
///
/// `total_bytes` includes blocks reserved for root, which are neither
/// `used_bytes` nor `free_bytes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsUsage {
    pub total_bytes: u64,
    pub used_bytes:  u64,
    /// Space available to unprivileged users.
    pub free_bytes:  u64,
}

impl FsUsage {
    /// Used share of the space a user could ever occupy, as `df` reports it.
    pub fn percent(&self) -> f64 {
        let usable = self.used_bytes.saturating_add(self.free_bytes);
        used_percent(usable, self.free_bytes)
    }
}

/// Instantaneous host resource readings.
pub trait HostStats {
    /// CPU utilisation since the previous call, averaged across cores (0.0 – 100.0).
    fn cpu_percent(&mut self) -> f64;

    /// Used memory as a percentage of total (0.0 – 100.0).
    fn memory_percent(&mut self) -> f64;

    /// Usage of the filesystem mounted at `mount`.  Zeroed when no such mount exists.
    fn fs_usage(&mut self, mount: &Path) -> FsUsage;
}

/// [`HostStats`] backed by `sysinfo`.
pub struct SysinfoHost {
    sys: System,
}

impl SysinfoHost {
    pub fn new() -> Self {
        let mut sys = System::new();
        // CPU usage is a delta between refreshes; prime the first reading.
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostStats for SysinfoHost {
    fn cpu_percent(&mut self) -> f64 {
        self.sys.refresh_cpu_usage();
        let per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        if per_core.is_empty() {
            return 0.0;
        }
        f64::from(per_core.iter().sum::<f32>()) / per_core.len() as f64
    }

    fn memory_percent(&mut self) -> f64 {
        self.sys.refresh_memory();
        used_percent(self.sys.total_memory(), self.sys.available_memory())
    }

    fn fs_usage(&mut self, mount: &Path) -> FsUsage {
        #[cfg(unix)]
        match statvfs_usage(mount) {
            Ok(usage) => return usage,
            Err(e) => tracing::debug!("statvfs '{}' failed: {e}", mount.display()),
        }

        disks_usage(mount)
    }
}

#[cfg(unix)]
fn statvfs_usage(mount: &Path) -> nix::Result<FsUsage> {
    let stat = nix::sys::statvfs::statvfs(mount)?;
    let block = stat.fragment_size() as u64;
    let blocks = stat.blocks() as u64;
    Ok(FsUsage {
        total_bytes: blocks * block,
        used_bytes:  blocks.saturating_sub(stat.blocks_free() as u64) * block,
        free_bytes:  stat.blocks_available() as u64 * block,
    })
}

/// Portable fallback.  `sysinfo` has no reserved-block count, so reserved
/// space shows up as used.
fn disks_usage(mount: &Path) -> FsUsage {
    let disks = Disks::new_with_refreshed_list();
    let usage = disks
        .iter()
        .find(|d| d.mount_point() == mount)
        .map(|d| FsUsage {
            total_bytes: d.total_space(),
            used_bytes:  d.total_space().saturating_sub(d.available_space()),
            free_bytes:  d.available_space(),
        });

    usage.unwrap_or_else(|| {
        tracing::debug!("no disk mounted at '{}'", mount.display());
        FsUsage::default()
    })
}
