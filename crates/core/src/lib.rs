pub mod error;
pub mod history;
pub mod state;
pub mod widget;

pub use error::{MonError, Result, SourceError};
pub use history::{BoundedSeries, Histories, Metric, DEFAULT_HISTORY_LENGTH};
pub use state::{ContainerInfo, DiskInfo, FrameState, Snapshot};
pub use widget::Section;
