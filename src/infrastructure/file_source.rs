// File-backed fleet source
use crate::application::fleet_source::FleetSource;
use crate::domain::fleet::Fleet;
use crate::infrastructure::input_error::InputError;
use crate::infrastructure::input_parser::parse_fleet;
use crate::infrastructure::validation::validate_fleet;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileFleetSource {
    path: PathBuf,
}

impl FileFleetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FleetSource for FileFleetSource {
    fn load_fleet(&self) -> anyhow::Result<Fleet> {
        tracing::debug!("Reading fleet from {}", self.path.display());

        let content = std::fs::read_to_string(&self.path).map_err(|source| InputError::Io {
            path: self.path.clone(),
            source,
        })?;

        let fleet = parse_fleet(&content)?;
        validate_fleet(&fleet)?;
        Ok(fleet)
    }
}
