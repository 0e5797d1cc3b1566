pub mod models;
pub mod search;
pub mod repository;
pub mod history;
pub mod random;

pub use models::{Airline, Airport, Flight, FlightEndpoint, FlightStatus};
pub use search::{FlightQuery, ResolvedIntent};
pub use history::RecentSearches;
pub use random::{RandomSource, SequenceRandom};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Could not understand query: {0}")]
    Unresolved(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
