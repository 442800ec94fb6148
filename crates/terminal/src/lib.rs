//! Terminal front end for `sysmon`.
//!
//! Owns the refresh loop: every tick it samples, composes a frame, clears
//! the screen and writes the frame, then sleeps until the next tick or until
//! Ctrl-C asks it to stop.

use crossterm::{cursor, terminal, QueueableCommand};
use mon_config::MonitorConfig;
use mon_core::{MonError, Result};
use mon_renderer::FrameRenderer;
use mon_system::{Collector, ConnectionSource, ContainerRuntime, HostStats};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Time between two refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Granularity at which a sleeping loop notices cancellation.
const CANCEL_POLL: Duration = Duration::from_millis(100);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the dashboard on stdout.  Returns once Ctrl-C has been pressed or
/// stdout has gone away.
pub fn run(config: &MonitorConfig) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .map_err(|e| MonError::Runtime(format!("failed to set Ctrl+C handler: {e}")))?;

    let collector = Collector::system(config.history_length()?)?;
    let renderer = FrameRenderer::from_config(config)?;

    info!(
        history_length = config.history_length,
        width = config.width,
        "dashboard started"
    );

    Dashboard::new(collector, renderer, io::stdout()).run(&running)
}

// ── Loop ──────────────────────────────────────────────────────────────────────

/// Loop states.  There is no way back from `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Single-threaded sample → render → write → sleep cycle.
pub struct Dashboard<H, R, N, W> {
    collector: Collector<H, R, N>,
    renderer:  FrameRenderer,
    out:       W,
    interval:  Duration,
    state:     LoopState,
    ticks:     u64,
}

impl<H, R, N, W> Dashboard<H, R, N, W>
where
    H: HostStats,
    R: ContainerRuntime,
    N: ConnectionSource,
    W: Write,
{
    pub fn new(collector: Collector<H, R, N>, renderer: FrameRenderer, out: W) -> Self {
        Self {
            collector,
            renderer,
            out,
            interval: REFRESH_INTERVAL,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    /// Override the refresh interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run until `running` is cleared, then print the shutdown notice.
    ///
    /// Data-source failures are part of the frame and never end the loop.
    /// A terminal that can no longer be written to (closed pipe, detached
    /// tty) ends it too; that is logged and still counts as a clean exit.
    pub fn run(mut self, running: &AtomicBool) -> Result<()> {
        while self.state == LoopState::Running {
            let written = if running.load(Ordering::SeqCst) {
                self.tick()
            } else {
                self.stop()
            };

            if let Err(e) = written {
                error!(ticks = self.ticks, "terminal write failed: {e}");
                self.state = LoopState::Stopped;
            } else if self.state == LoopState::Running {
                self.sleep(running);
            }
        }
        Ok(())
    }

    /// Sample once and replace the screen contents with the new frame.
    pub fn tick(&mut self) -> io::Result<()> {
        let snapshot = self.collector.sample();
        let frame = self.renderer.render(&snapshot, self.collector.histories());

        self.out
            .queue(terminal::Clear(terminal::ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;
        self.out.write_all(frame.as_str().as_bytes())?;
        self.out.flush()?;

        self.ticks += 1;
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        self.state = LoopState::Stopped;
        info!(ticks = self.ticks, "dashboard stopped");
        writeln!(self.out, "\nShutting down...")?;
        self.out.flush()
    }

    fn sleep(&self, running: &AtomicBool) {
        let deadline = Instant::now() + self.interval;
        while running.load(Ordering::SeqCst) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(CANCEL_POLL.min(deadline - now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mon_core::Metric;
    use mon_system::{Connection, FsUsage, StorageUsage};
    use std::cell::Cell;
    use std::num::NonZeroUsize;
    use std::path::Path;

    struct FixedHost;

    impl HostStats for FixedHost {
        fn cpu_percent(&mut self) -> f64 {
            20.0
        }

        fn memory_percent(&mut self) -> f64 {
            40.0
        }

        fn fs_usage(&mut self, _mount: &Path) -> FsUsage {
            FsUsage::default()
        }
    }

    /// Unreachable daemon that clears the run flag after `budget` container queries.
    struct StoppingRuntime<'a> {
        running: &'a AtomicBool,
        budget:  Cell<usize>,
    }

    impl ContainerRuntime for StoppingRuntime<'_> {
        fn storage_usage(&self) -> Result<StorageUsage> {
            Err(MonError::Runtime("daemon unreachable".into()))
        }

        fn running_containers(&self) -> Result<Vec<String>> {
            let left = self.budget.get().saturating_sub(1);
            self.budget.set(left);
            if left == 0 {
                self.running.store(false, Ordering::SeqCst);
            }
            Err(MonError::Runtime("daemon unreachable".into()))
        }
    }

    struct NoSockets;

    impl ConnectionSource for NoSockets {
        fn connections(&self) -> Result<Vec<Connection>> {
            Ok(Vec::new())
        }
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn dashboard<'a>(
        running: &'a AtomicBool,
        budget: usize,
        out: &'a mut Vec<u8>,
    ) -> Dashboard<FixedHost, StoppingRuntime<'a>, NoSockets, &'a mut Vec<u8>> {
        let runtime = StoppingRuntime {
            running,
            budget: Cell::new(budget),
        };
        let collector = Collector::new(size(60), FixedHost, runtime, NoSockets);
        Dashboard::new(collector, FrameRenderer::new(size(10)), out).with_interval(Duration::ZERO)
    }

    #[test]
    fn tick_clears_then_writes_frame() {
        let running = AtomicBool::new(true);
        let mut out = Vec::new();
        let mut dash = dashboard(&running, usize::MAX, &mut out);

        dash.tick().unwrap();
        assert_eq!(dash.ticks, 1);
        assert_eq!(dash.state, LoopState::Running);
        assert_eq!(dash.collector.histories().get(Metric::Cpu).len(), 1);
        drop(dash);

        let text = String::from_utf8(out).unwrap();
        // ESC[2J clears, ESC[1;1H homes the cursor.
        assert!(text.starts_with("\u{1b}[2J\u{1b}[1;1H"));
        assert!(text.contains("System Monitor - "));
        assert!(text.contains("Docker space error: daemon unreachable"));
    }

    #[test]
    fn cancelled_before_first_tick_only_says_goodbye() {
        let running = AtomicBool::new(false);
        let mut out = Vec::new();
        dashboard(&running, usize::MAX, &mut out).run(&running).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\nShutting down...\n");
    }

    #[test]
    fn runs_until_cancelled_despite_failing_runtime() {
        let running = AtomicBool::new(true);
        let mut out = Vec::new();
        dashboard(&running, 3, &mut out).run(&running).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("System Monitor - ").count(), 3);
        assert!(text.ends_with("\nShutting down...\n"));
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe {
        attempts: Cell<usize>,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts.set(self.attempts.get() + 1);
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_terminal_ends_loop_cleanly() {
        let running = AtomicBool::new(true);
        let runtime = StoppingRuntime {
            running: &running,
            budget:  Cell::new(usize::MAX),
        };
        let collector = Collector::new(size(60), FixedHost, runtime, NoSockets);
        let mut pipe = ClosedPipe { attempts: Cell::new(0) };
        let dash = Dashboard::new(collector, FrameRenderer::new(size(10)), &mut pipe)
            .with_interval(Duration::ZERO);

        assert!(dash.run(&running).is_ok());
        assert!(running.load(Ordering::SeqCst));
        assert_eq!(pipe.attempts.get(), 1);
    }

    #[test]
    fn closed_terminal_at_shutdown_is_not_an_error() {
        let running = AtomicBool::new(false);
        let runtime = StoppingRuntime {
            running: &running,
            budget:  Cell::new(usize::MAX),
        };
        let collector = Collector::new(size(60), FixedHost, runtime, NoSockets);
        let mut pipe = ClosedPipe { attempts: Cell::new(0) };
        let dash = Dashboard::new(collector, FrameRenderer::new(size(10)), &mut pipe);

        assert!(dash.run(&running).is_ok());
        assert_eq!(pipe.attempts.get(), 1);
    }
}
