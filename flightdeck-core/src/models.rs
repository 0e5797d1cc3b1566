use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

/// Fixed block time shown for every synthesized flight.
pub const FLIGHT_DURATION_HOURS: i64 = 6;
pub const FLIGHT_DURATION_TEXT: &str = "6h 0m";

// ============================================================================
// Reference Data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: i64,
    pub code: String, // IATA, e.g. "AA"
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: i64,
    pub code: String, // IATA, e.g. "JFK"
    pub name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Airport {
    /// Label shown next to the airport code, e.g. "John F Kennedy Intl, US".
    pub fn display_location(&self) -> String {
        if self.country_code.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country_code)
        }
    }
}

// ============================================================================
// Synthesized Flights
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Cancelled,
    Arrived,
    #[serde(rename = "In Air")]
    InAir,
}

impl FlightStatus {
    /// Statuses a synthesized flight may be given at random.
    pub const RANDOM_POOL: [FlightStatus; 4] = [
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::InAir,
        FlightStatus::Arrived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::InAir => "In Air",
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub location: String,
    pub airport: String,
    pub time: NaiveDateTime, // local-naive, no offset
    pub timezone: String,
}

impl FlightEndpoint {
    pub fn at(airport: &Airport, time: NaiveDateTime) -> Self {
        Self {
            location: airport.display_location(),
            airport: airport.code.clone(),
            time,
            timezone: airport.timezone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub airline: String,
    pub status: FlightStatus,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
}
