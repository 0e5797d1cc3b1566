use std::path::PathBuf;
use crate::models::{Airline, Airport};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Reference file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed reference data in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Source of the two reference tables.
///
/// Implementations do the raw read only; caching and the "empty on failure"
/// policy belong to the store that owns the loader.
pub trait ReferenceLoader: Send + Sync {
    fn load_airlines(&self) -> Result<Vec<Airline>, LoadError>;

    fn load_airports(&self) -> Result<Vec<Airport>, LoadError>;
}

/// Loader backed by in-memory tables, mostly useful for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    pub airlines: Vec<Airline>,
    pub airports: Vec<Airport>,
}

impl StaticLoader {
    pub fn new(airlines: Vec<Airline>, airports: Vec<Airport>) -> Self {
        Self { airlines, airports }
    }
}

impl ReferenceLoader for StaticLoader {
    fn load_airlines(&self) -> Result<Vec<Airline>, LoadError> {
        Ok(self.airlines.clone())
    }

    fn load_airports(&self) -> Result<Vec<Airport>, LoadError> {
        Ok(self.airports.clone())
    }
}
