use std::sync::{Arc, OnceLock};
use flightdeck_core::models::{Airline, Airport};
use flightdeck_core::random::RandomSource;
use flightdeck_core::repository::{LoadError, ReferenceLoader};
use tracing::{error, info, warn};

/// Read-through cache over the airline and airport tables.
///
/// Each table is loaded on first access and kept for the lifetime of the
/// store. A failed load is cached as an empty table; there is no reload.
pub struct ReferenceStore {
    loader: Arc<dyn ReferenceLoader>,
    airlines: OnceLock<Vec<Airline>>,
    airports: OnceLock<Vec<Airport>>,
}

impl ReferenceStore {
    pub fn new(loader: Arc<dyn ReferenceLoader>) -> Self {
        Self {
            loader,
            airlines: OnceLock::new(),
            airports: OnceLock::new(),
        }
    }

    pub fn airlines(&self) -> &[Airline] {
        self.airlines
            .get_or_init(|| or_empty("airlines", self.loader.load_airlines()))
    }

    pub fn airports(&self) -> &[Airport] {
        self.airports
            .get_or_init(|| or_empty("airports", self.loader.load_airports()))
    }

    /// Force both tables to load, returning their sizes.
    pub fn warm(&self) -> (usize, usize) {
        (self.airlines().len(), self.airports().len())
    }

    /// Exact match on the uppercased IATA code.
    pub fn find_airline(&self, code: &str) -> Option<&Airline> {
        let code = code.to_uppercase();
        self.airlines().iter().find(|a| a.code == code)
    }

    /// Case-insensitive substring match on the display name, first in table order.
    pub fn find_airline_by_name(&self, name: &str) -> Option<&Airline> {
        let needle = name.to_lowercase();
        self.airlines()
            .iter()
            .find(|a| a.name.to_lowercase().contains(&needle))
    }

    /// `count` independent uniform draws with replacement.
    pub fn random_airports(&self, count: usize, rng: &dyn RandomSource) -> Vec<Airport> {
        let airports = self.airports();
        if airports.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| airports[rng.pick_index(airports.len())].clone())
            .collect()
    }
}

fn or_empty<T>(table: &str, loaded: Result<Vec<T>, LoadError>) -> Vec<T> {
    match loaded {
        Ok(rows) => {
            info!(table = table, rows = rows.len(), "Loaded reference table");
            rows
        }
        Err(e @ LoadError::NotFound(_)) => {
            warn!(table = table, "{}", e);
            Vec::new()
        }
        Err(e) => {
            error!(table = table, "Error loading reference table: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use flightdeck_core::random::SequenceRandom;
    use flightdeck_core::repository::StaticLoader;

    fn airline(id: i64, code: &str, name: &str) -> Airline {
        Airline { id, code: code.to_string(), name: name.to_string() }
    }

    fn airport(id: i64, code: &str) -> Airport {
        Airport {
            id,
            code: code.to_string(),
            name: format!("{} Airport", code),
            country_code: "US".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
        }
    }

    fn sample_store() -> ReferenceStore {
        let loader = StaticLoader::new(
            vec![
                airline(1, "AA", "American Airlines"),
                airline(2, "BA", "British Airways"),
                airline(3, "AC", "Air Canada"),
            ],
            vec![airport(1, "JFK"), airport(2, "LHR"), airport(3, "HND")],
        );
        ReferenceStore::new(Arc::new(loader))
    }

    /// Counts loads and fails every one of them.
    struct CountingLoader {
        calls: AtomicUsize,
        error: fn() -> LoadError,
    }

    impl ReferenceLoader for CountingLoader {
        fn load_airlines(&self) -> Result<Vec<Airline>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }

        fn load_airports(&self) -> Result<Vec<Airport>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
    }

    #[test]
    fn test_find_airline_uppercases_code() {
        let store = sample_store();
        assert_eq!(store.find_airline("ba").map(|a| a.id), Some(2));
        assert_eq!(store.find_airline("BA").map(|a| a.id), Some(2));
        assert!(store.find_airline("ZZ").is_none());
    }

    #[test]
    fn test_find_airline_by_name_first_match_wins() {
        let store = sample_store();
        assert_eq!(store.find_airline_by_name("british").map(|a| a.code.as_str()), Some("BA"));
        // "air" appears in every name; table order decides.
        assert_eq!(store.find_airline_by_name("AIR").map(|a| a.code.as_str()), Some("AA"));
        assert!(store.find_airline_by_name("Qantas").is_none());
    }

    #[test]
    fn test_random_airports_draws_with_replacement() {
        let store = sample_store();
        let rng = SequenceRandom::new(vec![1, 1]);
        let picked = store.random_airports(2, &rng);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].code, "LHR");
        assert_eq!(picked[1].code, "LHR");
    }

    #[test]
    fn test_random_airports_on_empty_table() {
        let store = ReferenceStore::new(Arc::new(StaticLoader::default()));
        let rng = SequenceRandom::new(vec![0]);
        assert!(store.random_airports(2, &rng).is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_and_loads_once() {
        let loader = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            error: || LoadError::NotFound(PathBuf::from("data/airlines.csv")),
        });
        let store = ReferenceStore::new(loader.clone());

        assert!(store.airlines().is_empty());
        assert!(store.airlines().is_empty());
        assert!(store.find_airline("AA").is_none());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);

        assert!(store.airports().is_empty());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_corrupt_file_yields_empty() {
        let loader = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            error: || LoadError::Parse {
                path: PathBuf::from("data/airports.csv"),
                message: "bad row".to_string(),
            },
        });
        let store = ReferenceStore::new(loader);
        assert_eq!(store.warm(), (0, 0));
    }
}
