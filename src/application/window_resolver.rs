// Window resolver - Observation window of a station
use crate::application::report_index::ReportIndex;
use crate::domain::fleet::ChargerId;
use crate::domain::interval::ObservationWindow;

/// Earliest start and latest end over all reports of `chargers`.
///
/// Returns `ObservationWindow::EMPTY` when none of the chargers reported.
pub fn resolve_window(chargers: &[ChargerId], index: &ReportIndex<'_>) -> ObservationWindow {
    index
        .station_reports(chargers)
        .fold(None, |window: Option<ObservationWindow>, report| {
            Some(match window {
                Some(w) => ObservationWindow::new(w.start.min(report.start), w.end.max(report.end)),
                None => ObservationWindow::new(report.start, report.end),
            })
        })
        .unwrap_or(ObservationWindow::EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fleet::Report;

    fn sample_reports() -> Vec<Report> {
        vec![
            Report::new(1001, 0, 100, true),
            Report::new(1001, 200, 300, false),
            Report::new(1002, 50, 150, true),
            Report::new(1003, 25, 75, true),
        ]
    }

    #[test]
    fn test_window_spans_all_chargers() {
        let reports = sample_reports();
        let index = ReportIndex::new(&reports);
        assert_eq!(resolve_window(&[1001, 1002], &index), ObservationWindow::new(0, 300));
    }

    #[test]
    fn test_window_single_charger() {
        let reports = sample_reports();
        let index = ReportIndex::new(&reports);
        assert_eq!(resolve_window(&[1003], &index), ObservationWindow::new(25, 75));
    }

    #[test]
    fn test_window_includes_down_reports() {
        let reports = vec![Report::new(7, 10, 20, false), Report::new(7, 40, 90, true)];
        let index = ReportIndex::new(&reports);
        assert_eq!(resolve_window(&[7], &index), ObservationWindow::new(10, 90));
    }

    #[test]
    fn test_window_without_reports() {
        let reports = sample_reports();
        let index = ReportIndex::new(&reports);
        assert_eq!(resolve_window(&[9999], &index), ObservationWindow::EMPTY);
        assert_eq!(resolve_window(&[], &index), ObservationWindow::EMPTY);
    }
}
