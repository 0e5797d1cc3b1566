use std::collections::VecDeque;
use crate::models::Flight;

pub const HISTORY_CAPACITY: usize = 5;

/// Client-local list of recently viewed flights, newest first.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    entries: VecDeque<Flight>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Put `flight` at the front. An entry with the same flight number is
    /// replaced rather than duplicated; the oldest entry falls off when full.
    pub fn push(&mut self, flight: Flight) {
        self.entries.retain(|f| f.flight_number != flight.flight_number);
        self.entries.push_front(flight);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightEndpoint, FlightStatus};
    use chrono::NaiveDate;

    fn flight(number: &str) -> Flight {
        let time = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let endpoint = FlightEndpoint {
            location: "Somewhere".to_string(),
            airport: "XXX".to_string(),
            time,
            timezone: "UTC".to_string(),
        };
        Flight {
            id: number.to_string(),
            flight_number: number.to_string(),
            airline: "Test Air".to_string(),
            status: FlightStatus::OnTime,
            departure: endpoint.clone(),
            arrival: endpoint,
            duration: "6h 0m".to_string(),
        }
    }

    fn numbers(history: &RecentSearches) -> Vec<&str> {
        history.iter().map(|f| f.flight_number.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut history = RecentSearches::new();
        history.push(flight("AA100"));
        history.push(flight("BA200"));
        assert_eq!(numbers(&history), vec!["BA200", "AA100"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut history = RecentSearches::new();
        history.push(flight("AA100"));
        history.push(flight("BA200"));
        history.push(flight("UA300"));
        history.push(flight("AA100"));

        assert_eq!(numbers(&history), vec!["AA100", "UA300", "BA200"]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut history = RecentSearches::new();
        for i in 0..12 {
            history.push(flight(&format!("AA{}", 100 + i)));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(numbers(&history)[0], "AA111");
        assert_eq!(numbers(&history)[4], "AA107");
    }
}
