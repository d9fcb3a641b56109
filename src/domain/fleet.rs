// Fleet domain models
use super::interval::{Interval, Tick};
use serde::Serialize;

pub type StationId = u32;
pub type ChargerId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub chargers: Vec<ChargerId>,
}

impl Station {
    pub fn new(id: StationId, chargers: Vec<ChargerId>) -> Self {
        Self { id, chargers }
    }
}

/// One observed availability state of a charger over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub charger_id: ChargerId,
    pub start: Tick,
    pub end: Tick,
    pub is_up: bool,
}

impl Report {
    pub fn new(charger_id: ChargerId, start: Tick, end: Tick, is_up: bool) -> Self {
        Self {
            charger_id,
            start,
            end,
            is_up,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// Stations in input order together with every availability report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    pub stations: Vec<Station>,
    pub reports: Vec<Report>,
}

impl Fleet {
    pub fn new(stations: Vec<Station>, reports: Vec<Report>) -> Self {
        Self { stations, reports }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UptimeResult {
    pub station_id: StationId,
    #[serde(rename = "uptime")]
    pub percentage: u8,
}

impl UptimeResult {
    pub fn new(station_id: StationId, percentage: u8) -> Self {
        Self {
            station_id,
            percentage,
        }
    }
}
