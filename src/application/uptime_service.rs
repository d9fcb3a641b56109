// Uptime service - Percentage of a station's window with at least one charger up
use crate::application::report_index::ReportIndex;
use crate::application::window_resolver::resolve_window;
use crate::domain::fleet::{ChargerId, Report};
use crate::domain::interval::{merge_intervals, Interval, ObservationWindow};

#[derive(Debug, Clone)]
pub struct UptimeService<'a> {
    index: ReportIndex<'a>,
}

impl<'a> UptimeService<'a> {
    pub fn new(reports: &'a [Report]) -> Self {
        Self {
            index: ReportIndex::new(reports),
        }
    }

    pub fn index(&self) -> &ReportIndex<'a> {
        &self.index
    }

    /// Uptime of the station owning `chargers`, in whole percent rounded down.
    ///
    /// A station whose window has zero length (including one without any
    /// reports) is 0% up.
    pub fn station_uptime(&self, chargers: &[ChargerId]) -> u8 {
        let window = resolve_window(chargers, &self.index);
        if window.is_empty() {
            return 0;
        }

        let up_intervals = self
            .index
            .station_reports(chargers)
            .filter(|report| report.is_up)
            .map(Report::interval);

        let total_up = covered_ticks(merge_intervals(up_intervals), &window);
        let percentage = uptime_percentage(total_up, &window);

        tracing::debug!(
            "Window [{}, {}) with {} up ticks -> {}%",
            window.start,
            window.end,
            total_up,
            percentage
        );

        percentage
    }
}

/// Sum of `merged` clipped to `window`. Intervals must already be disjoint.
fn covered_ticks(merged: Vec<Interval>, window: &ObservationWindow) -> u128 {
    merged
        .iter()
        .filter_map(|interval| interval.clip(window))
        .map(|clipped| u128::from(clipped.len()))
        .sum()
}

/// `floor(total_up * 100 / span)`, computed wide so large tick values cannot overflow.
fn uptime_percentage(total_up: u128, window: &ObservationWindow) -> u8 {
    let span = u128::from(window.span());
    if span == 0 {
        return 0;
    }
    let percentage = (total_up * 100 / span).min(100);
    percentage as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_coverage_from_two_chargers() {
        let reports = vec![
            Report::new(1001, 0, 50, true),
            Report::new(1001, 50, 100, true),
            Report::new(1002, 50, 100, true),
        ];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1001, 1002]), 100);
    }

    #[test]
    fn test_gap_produces_partial_uptime() {
        let reports = vec![Report::new(1004, 0, 50, true), Report::new(1004, 100, 200, true)];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1004]), 75);
    }

    #[test]
    fn test_all_down() {
        let reports = vec![Report::new(1003, 25, 75, false)];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1003]), 0);
    }

    #[test]
    fn test_no_reports() {
        let service = UptimeService::new(&[]);
        assert_eq!(service.station_uptime(&[1001]), 0);
        assert_eq!(service.station_uptime(&[]), 0);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        let reports = vec![Report::new(1001, 0, 10, true), Report::new(1001, 20, 30, false)];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1001]), 33);

        // 2/3 of the window is up: 66.67% must still truncate to 66.
        let reports = vec![Report::new(1001, 0, 20, true), Report::new(1001, 20, 30, false)];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1001]), 66);
    }

    #[test]
    fn test_overlapping_up_reports_count_once() {
        let reports = vec![
            Report::new(1, 0, 60, true),
            Report::new(2, 40, 80, true),
            Report::new(2, 80, 100, false),
        ];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1, 2]), 80);
    }

    #[test]
    fn test_down_report_does_not_cancel_up_report() {
        let reports = vec![Report::new(1, 0, 100, true), Report::new(2, 0, 100, false)];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1, 2]), 100);
    }

    #[test]
    fn test_other_stations_reports_ignored() {
        let reports = vec![
            Report::new(1001, 0, 100, true),
            Report::new(1002, 50, 150, false),
            Report::new(1003, 25, 75, true),
        ];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1001, 1002]), 66);
        assert_eq!(service.station_uptime(&[1003]), 100);
    }

    #[test]
    fn test_large_ticks_do_not_overflow() {
        let reports = vec![
            Report::new(1, 0, u64::MAX / 2, true),
            Report::new(1, u64::MAX / 2, u64::MAX, false),
        ];
        let service = UptimeService::new(&reports);
        assert_eq!(service.station_uptime(&[1]), 49);
    }

    #[test]
    fn test_uptime_percentage_zero_span() {
        assert_eq!(uptime_percentage(0, &ObservationWindow::EMPTY), 0);
    }
}
