use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Structured lookup accepted by the flight endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

impl FlightQuery {
    pub fn by_flight_number(flight_number: impl Into<String>) -> Self {
        Self {
            flight_number: Some(flight_number.into()),
            ..Default::default()
        }
    }

    pub fn by_airline(airline: impl Into<String>) -> Self {
        Self {
            airline: Some(airline.into()),
            ..Default::default()
        }
    }
}

/// Structured intent extracted from free text. Unresolved fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIntent {
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub destination: Option<String>,
}

impl ResolvedIntent {
    pub fn is_empty(&self) -> bool {
        self.flight_number.is_none() && self.airline.is_none() && self.destination.is_none()
    }

    pub fn into_query(self, date: Option<NaiveDate>) -> FlightQuery {
        FlightQuery {
            flight_number: self.flight_number,
            airline: self.airline,
            destination: self.destination,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_query_deserialization() {
        let json = r#"
            {
                "flightNumber": "BA456",
                "destination": "Paris",
                "date": "2024-12-25"
            }
        "#;
        let query: FlightQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.flight_number.as_deref(), Some("BA456"));
        assert_eq!(query.airline, None);
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 12, 25));
    }

    #[test]
    fn test_intent_serializes_nulls() {
        let intent = ResolvedIntent {
            airline: Some("Emirates".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["airline"], "Emirates");
        assert!(json["flightNumber"].is_null());
        assert!(json["destination"].is_null());
        assert!(!intent.is_empty());
        assert!(ResolvedIntent::default().is_empty());
    }
}
