// Cross-reference checks between stations and reports
use crate::domain::fleet::{ChargerId, Fleet, StationId};
use crate::infrastructure::input_error::InputError;
use std::collections::HashSet;

/// Reject fleets the uptime calculation is not defined for: duplicate
/// stations, chargers owned more than once, and reports for unowned chargers.
pub fn validate_fleet(fleet: &Fleet) -> Result<(), InputError> {
    let mut station_ids: HashSet<StationId> = HashSet::new();
    let mut owned_chargers: HashSet<ChargerId> = HashSet::new();

    for station in &fleet.stations {
        if !station_ids.insert(station.id) {
            return Err(InputError::DuplicateStation(station.id));
        }
        for &charger_id in &station.chargers {
            if !owned_chargers.insert(charger_id) {
                return Err(InputError::DuplicateCharger(charger_id));
            }
        }
    }

    if let Some(report) = fleet
        .reports
        .iter()
        .find(|report| !owned_chargers.contains(&report.charger_id))
    {
        return Err(InputError::UnknownCharger(report.charger_id));
    }

    Ok(())
}
