// Fleet evaluator - Uptime for every station, ordered by station id
use crate::application::uptime_service::UptimeService;
use crate::domain::fleet::{Fleet, UptimeResult};

pub fn evaluate_fleet(fleet: &Fleet) -> Vec<UptimeResult> {
    let service = UptimeService::new(&fleet.reports);

    tracing::info!(
        "Evaluating {} stations from {} reports across {} chargers",
        fleet.stations.len(),
        fleet.reports.len(),
        service.index().charger_count()
    );

    let mut results: Vec<UptimeResult> = fleet
        .stations
        .iter()
        .map(|station| {
            let percentage = service.station_uptime(&station.chargers);
            tracing::debug!("Station {}: {}%", station.id, percentage);
            UptimeResult::new(station.id, percentage)
        })
        .collect();

    results.sort_by_key(|result| result.station_id);
    results
}
