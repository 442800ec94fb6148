use mon_core::{MonError, Result};
use std::iter::repeat;
use std::num::NonZeroUsize;

/// Glyph levels from lowest to highest.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Level used for every sample of a flat window.
const FLAT_LEVEL: usize = 4;

/// Render the most recent `width` samples as a one-line trend graph.
///
/// The window is min-max normalised on its own, so the lowest shown sample
/// is always `▁` and the highest `█`.  Fewer samples than `width` yield a
/// shorter string; an empty series yields a flat baseline of `width` cells.
pub fn render(samples: &[f64], width: NonZeroUsize) -> String {
    let width = width.get();
    if samples.is_empty() {
        return repeat(GLYPHS[0]).take(width).collect();
    }

    let window = &samples[samples.len().saturating_sub(width)..];
    let (min, max) = window
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));

    let top = GLYPHS.len() - 1;
    window
        .iter()
        .map(|&x| {
            let level = if min == max {
                FLAT_LEVEL
            } else {
                ((x - min) / (max - min) * top as f64).floor() as usize
            };
            GLYPHS[level.min(top)]
        })
        .collect()
}

/// [`render`] for an unchecked width.  Zero is an `InvalidArgument`.
pub fn try_render(samples: &[f64], width: usize) -> Result<String> {
    let width = NonZeroUsize::new(width)
        .ok_or_else(|| MonError::InvalidArgument("sparkline width must be at least 1".into()))?;
    Ok(render(samples, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_series_is_flat_baseline() {
        assert_eq!(render(&[], width(5)), "▁▁▁▁▁");
    }

    #[test]
    fn flat_series_uses_middle_glyph() {
        assert_eq!(render(&[5.0, 5.0, 5.0], width(10)), "▅▅▅");
    }

    #[test]
    fn ascending_spans_lowest_to_highest() {
        let samples: Vec<f64> = (0..8).map(f64::from).collect();
        assert_eq!(render(&samples, width(8)), "▁▂▃▄▅▆▇█");
    }

    #[test]
    fn output_length_is_min_of_width_and_len() {
        let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        for w in 1..=12 {
            let out = render(&samples, width(w));
            assert_eq!(out.chars().count(), w.min(samples.len()));
        }
    }

    #[test]
    fn normalises_over_visible_window_only() {
        // 100 is outside the last three samples and must not flatten them.
        let out = render(&[100.0, 30.0, 40.0, 50.0], width(3));
        assert_eq!(out, "▁▄█");
    }

    #[test]
    fn fractional_range_reaches_highest_glyph() {
        for window in [[0.0, 1.3], [0.0, 2.6], [10.0, 14.7], [0.1, 0.3]] {
            let out = render(&window, width(5));
            assert_eq!(out, "▁█", "{window:?}");
        }
    }

    #[test]
    fn ascending_percentages_end_on_highest_glyph() {
        let samples = [3.7, 12.9, 27.4, 41.1, 58.3, 66.6, 79.2, 93.8];
        for w in 2..=samples.len() {
            let out = render(&samples, width(w));
            assert_eq!(out.chars().next(), Some(GLYPHS[0]), "width {w}");
            assert_eq!(out.chars().last(), Some(GLYPHS[7]), "width {w}");
        }
    }

    #[test]
    fn newest_sample_is_rightmost() {
        let out = render(&[10.0, 0.0], width(2));
        assert_eq!(out, "█▁");
    }

    #[test]
    fn zero_width_is_invalid_argument() {
        assert!(matches!(try_render(&[1.0], 0), Err(MonError::InvalidArgument(_))));
        assert_eq!(try_render(&[1.0, 2.0], 2).unwrap(), "▁█");
    }
}
