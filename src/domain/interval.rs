// Interval algebra over integer ticks

/// Opaque time unit used by availability reports.
pub type Tick = u64;

/// A half-open `[start, end)` span of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: Tick,
    pub end: Tick,
}

impl Interval {
    pub fn new(start: Tick, end: Tick) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> Tick {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Intersect with `window`, returning `None` when nothing is left.
    pub fn clip(&self, window: &ObservationWindow) -> Option<Interval> {
        let clipped = Interval::new(self.start.max(window.start), self.end.min(window.end));
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// The span between the earliest report start and the latest report end of a station.
///
/// `ObservationWindow::EMPTY` stands in for a station without any reports; it has
/// zero span just like a legitimately zero-length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationWindow {
    pub start: Tick,
    pub end: Tick,
}

impl ObservationWindow {
    pub const EMPTY: ObservationWindow = ObservationWindow { start: 0, end: 0 };

    pub fn new(start: Tick, end: Tick) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> Tick {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Merge arbitrary-order intervals into the minimal sorted set of disjoint intervals
/// covering the same points.
///
/// Touching intervals are merged: `[0, 50)` and `[50, 100)` become `[0, 100)`, so
/// back-to-back reports count as continuous time. Every pair of neighbours in the
/// result satisfies `merged[i].end < merged[i + 1].start`.
pub fn merge_intervals<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
    sorted.sort_unstable_by_key(|i| i.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
            }
            _ => merged.push(next),
        }
    }

    debug_assert!(merged.windows(2).all(|pair| pair[0].end < pair[1].start));
    merged
}
