use crate::line;
use mon_core::{FrameState, Section};

/// Displays space used by the container runtime, or why it is unknown.
#[derive(Debug, Default)]
pub struct StorageWidget;

impl StorageWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for StorageWidget {
    fn id(&self) -> &str {
        "docker-storage"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        line(out, "Docker Storage:");
        match &state.snapshot.docker_space {
            Ok(used_gb) => line(out, format!("Used: {used_gb:.1}GB")),
            Err(e) => line(out, e.to_string()),
        }
        line(out, "");
    }
}
