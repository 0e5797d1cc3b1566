use std::sync::Arc;
use flightdeck_search::FlightLookup;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<FlightLookup>,
}

impl AppState {
    pub fn new(lookup: FlightLookup) -> Self {
        Self { lookup: Arc::new(lookup) }
    }
}
