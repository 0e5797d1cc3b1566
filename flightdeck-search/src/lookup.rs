use std::sync::Arc;
use chrono::{NaiveDate, NaiveDateTime};
use flightdeck_core::models::Flight;
use flightdeck_core::random::RandomSource;
use flightdeck_core::search::FlightQuery;
use flightdeck_core::{CoreError, CoreResult};
use flightdeck_store::ReferenceStore;
use tracing::debug;

use crate::generator::{FlightSynthesizer, SynthesisRequest};
use crate::normalizer::QueryNormalizer;

pub const DEFAULT_CONVERSATIONAL_RESULTS: usize = 5;
const AIRLINE_CODE_LEN: usize = 2;

/// Resolves a query to an airline and hands it to the synthesizer.
///
/// "Not found" is always an empty result, never an error.
pub struct FlightLookup {
    store: Arc<ReferenceStore>,
    synthesizer: FlightSynthesizer,
    normalizer: QueryNormalizer,
    conversational_results: usize,
}

impl FlightLookup {
    pub fn new(store: Arc<ReferenceStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            synthesizer: FlightSynthesizer::new(store.clone(), rng),
            store,
            normalizer: QueryNormalizer::default(),
            conversational_results: DEFAULT_CONVERSATIONAL_RESULTS,
        }
    }

    pub fn with_normalizer(mut self, normalizer: QueryNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_conversational_results(mut self, count: usize) -> Self {
        self.conversational_results = count;
        self
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    pub fn lookup(&self, query: &FlightQuery, now: NaiveDateTime) -> Vec<Flight> {
        let destination = non_blank(query.destination.as_deref());

        if let Some(flight_number) = non_blank(query.flight_number.as_deref()) {
            let (code, suffix) = split_flight_number(flight_number);
            let Some(airline) = self.store.find_airline(code) else {
                debug!(flight_number = flight_number, "No airline for flight number prefix");
                return Vec::new();
            };

            return self.synthesizer.synthesize(&SynthesisRequest {
                airline,
                suffix: non_blank(Some(suffix)),
                destination,
                date: query.date,
                count: 1,
                first_on_time: true,
                now,
            });
        }

        if let Some(name) = non_blank(query.airline.as_deref()) {
            let Some(airline) = self.store.find_airline_by_name(name) else {
                debug!(airline = name, "No airline matches name");
                return Vec::new();
            };

            return self.synthesizer.synthesize(&SynthesisRequest {
                airline,
                suffix: None,
                destination,
                date: query.date,
                count: self.conversational_results,
                first_on_time: false,
                now,
            });
        }

        debug!("Query has neither flight number nor airline");
        Vec::new()
    }

    /// Free text end to end: bare flight numbers skip the heuristics, and
    /// text that resolves to nothing is reported as an error.
    pub fn search_text(
        &self,
        text: &str,
        date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> CoreResult<Vec<Flight>> {
        if text.trim().is_empty() {
            return Err(CoreError::ValidationError("Query is required".to_string()));
        }

        let intent = self.normalizer.resolve(text);
        if intent.is_empty() {
            return Err(CoreError::Unresolved(text.trim().to_string()));
        }

        debug!(?intent, "Resolved free-text query");
        Ok(self.lookup(&intent.into_query(date), now))
    }
}

/// First two characters are the airline code, the rest is kept as typed.
fn split_flight_number(flight_number: &str) -> (&str, &str) {
    let split = flight_number
        .char_indices()
        .nth(AIRLINE_CODE_LEN)
        .map(|(i, _)| i)
        .unwrap_or(flight_number.len());
    flight_number.split_at(split)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
