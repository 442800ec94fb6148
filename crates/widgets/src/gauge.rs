use std::iter::repeat;

pub const FILLED: char = '█';
pub const EMPTY: char = '░';

/// Render `percent` as a bracketed bar of `width` cells followed by the
/// value to one decimal, e.g. `[█████░░░░░] 50.0%`.
///
/// Values outside `0..=100` are shown as-is in the label; the bar itself is
/// clamped to empty or full.
pub fn render(percent: f64, width: usize) -> String {
    let filled = filled_cells(percent, width);
    let bar: String = repeat(FILLED)
        .take(filled)
        .chain(repeat(EMPTY).take(width - filled))
        .collect();

    format!("[{bar}] {percent:.1}%")
}

/// `width * percent / 100`, truncated and clamped to `0..=width`.
fn filled_cells(percent: f64, width: usize) -> usize {
    let raw = (width as f64 * percent / 100.0).trunc();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, width as f64) as usize
}
