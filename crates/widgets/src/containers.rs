use crate::{line, trend::trend};
use mon_core::{FrameState, Metric, Section};

/// Lists running containers under their count trend.
///
/// A failed query shows a count of 0 and the error message in place of the
/// names.
#[derive(Debug, Default)]
pub struct ContainersWidget;

impl ContainersWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for ContainersWidget {
    fn id(&self) -> &str {
        "docker-containers"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        let error;
        let (count, names): (usize, &[String]) = match &state.snapshot.containers {
            Ok(info) => (info.count, info.names.as_slice()),
            Err(e) => {
                error = [e.to_string()];
                (0, &error[..])
            }
        };

        line(out, format!("Docker Containers ({count}):"));
        line(out, "Container count trend:");
        trend(out, state, Metric::Containers);
        for name in names {
            line(out, format!("- {name}"));
        }
        line(out, "");
    }
}
