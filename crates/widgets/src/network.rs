use crate::line;
use mon_core::{FrameState, Section};

/// Lists every listening socket as `ip:port`.
#[derive(Debug, Default)]
pub struct PortsWidget;

impl PortsWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Section for PortsWidget {
    fn id(&self) -> &str {
        "ports"
    }

    fn render(&self, state: &FrameState<'_>, out: &mut String) {
        let ports = &state.snapshot.listening_ports;
        line(out, format!("Used Network Ports ({}):", ports.len()));
        for port in ports {
            line(out, format!("- {port}"));
        }
    }
}
