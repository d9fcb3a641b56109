// Report lookup keyed by charger
use crate::domain::fleet::{ChargerId, Report};
use std::collections::HashMap;

/// Reports bucketed by charger id, built once per fleet so each station only
/// touches its own reports.
#[derive(Debug, Clone, Default)]
pub struct ReportIndex<'a> {
    by_charger: HashMap<ChargerId, Vec<&'a Report>>,
}

impl<'a> ReportIndex<'a> {
    pub fn new(reports: &'a [Report]) -> Self {
        let mut by_charger: HashMap<ChargerId, Vec<&'a Report>> = HashMap::new();
        for report in reports {
            by_charger.entry(report.charger_id).or_default().push(report);
        }
        Self { by_charger }
    }

    pub fn reports_for(&self, charger_id: ChargerId) -> &[&'a Report] {
        self.by_charger
            .get(&charger_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every report belonging to any of `chargers`.
    pub fn station_reports<'s>(
        &'s self,
        chargers: &'s [ChargerId],
    ) -> impl Iterator<Item = &'a Report> + 's {
        chargers
            .iter()
            .flat_map(move |&charger_id| self.reports_for(charger_id).iter().copied())
    }

    /// Number of distinct chargers that have at least one report.
    pub fn charger_count(&self) -> usize {
        self.by_charger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_by_charger() {
        let reports = vec![
            Report::new(1001, 0, 100, true),
            Report::new(1002, 50, 150, false),
            Report::new(1001, 200, 300, false),
        ];
        let index = ReportIndex::new(&reports);

        assert_eq!(index.charger_count(), 2);
        assert_eq!(index.reports_for(1001).len(), 2);
        assert_eq!(index.reports_for(1002).len(), 1);
        assert!(index.reports_for(9999).is_empty());
    }

    #[test]
    fn test_station_reports() {
        let reports = vec![
            Report::new(1001, 0, 100, true),
            Report::new(1002, 50, 150, false),
            Report::new(1003, 25, 75, true),
        ];
        let index = ReportIndex::new(&reports);

        let chargers = [1001, 1002];
        let found: Vec<ChargerId> = index
            .station_reports(&chargers)
            .map(|r| r.charger_id)
            .collect();
        assert_eq!(found, vec![1001, 1002]);
        assert_eq!(index.station_reports(&[]).count(), 0);
    }
}
