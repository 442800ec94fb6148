use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Default number of samples kept per series: one minute at a 2 s cadence.
pub const DEFAULT_HISTORY_LENGTH: NonZeroUsize = match NonZeroUsize::new(60) {
    Some(n) => n,
    None => unreachable!(),
};

/// Rolling history of samples for a single metric, used for sparkline rendering.
///
/// Appending at capacity evicts the oldest sample first, so the length never
/// exceeds the capacity given at construction.
#[derive(Debug, Clone)]
pub struct BoundedSeries {
    samples:  VecDeque<f64>,
    capacity: NonZeroUsize,
}

impl BoundedSeries {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn append(&mut self, value: f64) {
        if self.samples.len() == self.capacity.get() {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// All retained samples, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Metrics that keep a rolling trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
    Containers,
}

/// One [`BoundedSeries`] per trended metric, all sharing the same capacity.
#[derive(Debug, Clone)]
pub struct Histories {
    cpu:        BoundedSeries,
    memory:     BoundedSeries,
    disk:       BoundedSeries,
    containers: BoundedSeries,
}

impl Histories {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cpu:        BoundedSeries::new(capacity),
            memory:     BoundedSeries::new(capacity),
            disk:       BoundedSeries::new(capacity),
            containers: BoundedSeries::new(capacity),
        }
    }

    pub fn get(&self, metric: Metric) -> &BoundedSeries {
        match metric {
            Metric::Cpu        => &self.cpu,
            Metric::Memory     => &self.memory,
            Metric::Disk       => &self.disk,
            Metric::Containers => &self.containers,
        }
    }

    pub fn append(&mut self, metric: Metric, value: f64) {
        let series = match metric {
            Metric::Cpu        => &mut self.cpu,
            Metric::Memory     => &mut self.memory,
            Metric::Disk       => &mut self.disk,
            Metric::Containers => &mut self.containers,
        };
        series.append(value);
    }
}

impl Default for Histories {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}
