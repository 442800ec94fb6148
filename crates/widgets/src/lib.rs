//! Text sections of the dashboard and the two glyph renderers they share.

pub mod containers;
pub mod cpu;
pub mod disk;
pub mod gauge;
pub mod header;
pub mod memory;
pub mod network;
pub mod sparkline;
pub mod storage;
mod trend;

pub use containers::ContainersWidget;
pub use cpu::CpuWidget;
pub use disk::DiskWidget;
pub use header::HeaderWidget;
pub use memory::MemoryWidget;
pub use network::PortsWidget;
pub use storage::StorageWidget;

/// Append `text` and a newline to the frame buffer.
pub(crate) fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}
