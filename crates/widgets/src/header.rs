use crate::line;
use mon_core::{FrameState, Section};

const RULE_WIDTH: usize = 60;

/// Frame header: the dashboard title and the time the snapshot was taken.
#[derive(Debug, Default)]
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for HeaderWidget {
    fn id(&self) -> &str {
        "header"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        let rule = "=".repeat(RULE_WIDTH);
        let time = state.snapshot.time.format("%H:%M:%S");

        line(out, "");
        line(out, &rule);
        line(out, format!("System Monitor - {time}"));
        line(out, &rule);
        line(out, "");
    }
}
