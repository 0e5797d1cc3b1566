use std::sync::Arc;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use flightdeck_core::models::{
    Airline, Airport, Flight, FlightEndpoint, FlightStatus, FLIGHT_DURATION_HOURS, FLIGHT_DURATION_TEXT,
};
use flightdeck_core::random::RandomSource;
use flightdeck_store::ReferenceStore;
use tracing::warn;

/// Everything needed to fabricate a batch of flights for one airline.
#[derive(Debug, Clone)]
pub struct SynthesisRequest<'a> {
    pub airline: &'a Airline,
    /// Used verbatim after the airline code; random per flight when absent.
    pub suffix: Option<&'a str>,
    /// Replaces the arrival location label and pins the arrival airport.
    pub destination: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub count: usize,
    /// Flight-number searches show the first result as on time.
    pub first_on_time: bool,
    pub now: NaiveDateTime,
}

/// Fabricates flights from random reference airports.
pub struct FlightSynthesizer {
    store: Arc<ReferenceStore>,
    rng: Arc<dyn RandomSource>,
}

impl FlightSynthesizer {
    pub fn new(store: Arc<ReferenceStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self { store, rng }
    }

    pub fn synthesize(&self, req: &SynthesisRequest<'_>) -> Vec<Flight> {
        let mut pair = self.store.random_airports(2, self.rng.as_ref()).into_iter();
        let (Some(mut departure), Some(mut arrival)) = (pair.next(), pair.next()) else {
            warn!(airline = %req.airline.code, "Not enough airports to synthesize flights");
            return Vec::new();
        };

        let now = req.now.with_nanosecond(0).unwrap_or(req.now);
        let anchor = match req.date {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => now,
        };
        let stamp = now.and_utc().timestamp_millis();

        let mut flights = Vec::with_capacity(req.count);
        for index in 0..req.count {
            if index > 0 {
                if let Some(next) = self.draw_airport() {
                    departure = next;
                }
                if req.destination.is_none() {
                    if let Some(next) = self.draw_airport() {
                        arrival = next;
                    }
                }
            }
            flights.push(self.build_flight(req, index, &departure, &arrival, anchor, stamp));
        }
        flights
    }

    fn draw_airport(&self) -> Option<Airport> {
        self.store.random_airports(1, self.rng.as_ref()).pop()
    }

    fn build_flight(
        &self,
        req: &SynthesisRequest<'_>,
        index: usize,
        departure: &Airport,
        arrival: &Airport,
        anchor: NaiveDateTime,
        stamp: i64,
    ) -> Flight {
        let suffix = match req.suffix {
            Some(suffix) => suffix.to_string(),
            None => self.rng.next_in_range(100, 999).to_string(),
        };

        let offset_hours = 2 + i64::from(self.rng.next_in_range(0, 24));
        let departs_at = anchor + Duration::hours(offset_hours);
        let arrives_at = departs_at + Duration::hours(FLIGHT_DURATION_HOURS);

        let status = if index == 0 && req.first_on_time {
            FlightStatus::OnTime
        } else {
            let pool = FlightStatus::RANDOM_POOL;
            pool[self.rng.pick_index(pool.len())]
        };

        let mut arrival_endpoint = FlightEndpoint::at(arrival, arrives_at);
        if let Some(destination) = req.destination {
            // Label only; code and timezone stay with the drawn airport.
            arrival_endpoint.location = destination.to_string();
        }

        Flight {
            id: format!("{}-{}", stamp, index),
            flight_number: format!("{}{}", req.airline.code, suffix),
            airline: req.airline.name.clone(),
            status,
            departure: FlightEndpoint::at(departure, departs_at),
            arrival: arrival_endpoint,
            duration: FLIGHT_DURATION_TEXT.to_string(),
        }
    }
}
