use crate::state::FrameState;

/// Every block of the dashboard implements this trait.
///
/// Sections are purely presentational: they receive a read-only view of the
/// latest snapshot and histories and append their lines to the frame.
/// Sampling is handled by `mon-system`, ordering by `mon-renderer`.
pub trait Section: std::fmt::Debug {
    /// Unique string identifier, e.g. `"cpu"` or `"ports"`.
    fn id(&self) -> &str;

    /// Append this section's lines, each terminated by `\n`, to `out`.
    fn render(&self, state: &FrameState<'_>, out: &mut String);
}
