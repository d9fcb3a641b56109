// Source trait for loading a validated fleet
use crate::domain::fleet::Fleet;

pub trait FleetSource {
    /// Load stations and reports. Implementations reject malformed input and
    /// reports for chargers that no station owns, so the returned fleet is
    /// ready for evaluation.
    fn load_fleet(&self) -> anyhow::Result<Fleet>;
}
