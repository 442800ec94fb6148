use crate::{gauge, line, sparkline};
use mon_core::{FrameState, Metric};

/// Shared layout of the percentage sections: title, gauge, trend label, sparkline.
pub(crate) fn gauge_with_trend(
    out: &mut String,
    state: &FrameState<'_>,
    percent: f64,
    metric: Metric,
    trend_label: &str,
) {
    line(out, gauge::render(percent, state.width.get()));
    line(out, trend_label);
    trend(out, state, metric);
}

/// Sparkline of `metric`'s retained history.
pub(crate) fn trend(out: &mut String, state: &FrameState<'_>, metric: Metric) {
    let samples = state.histories.get(metric).values();
    line(out, sparkline::render(&samples, state.width));
}
