use regex::Regex;

/// Two or three letters then three or four digits, anywhere in the text.
pub const FLIGHT_NUMBER_PATTERN: &str = r"(?i)[a-z]{2,3}[0-9]{3,4}";
/// The whole input is a flight number and nothing else.
pub const BARE_FLIGHT_NUMBER_PATTERN: &str = r"^[A-Za-z]{2,3}[0-9]{1,4}$";
/// Applied to the lowercased text.
pub const DESTINATION_PATTERN: &str = r"\bto\s+([a-z\s]+)";
pub const DESTINATION_STOP_WORD: &str = " from";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineKeyword {
    pub keyword: String,
    pub airline: String,
}

impl AirlineKeyword {
    pub fn new(keyword: &str, airline: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            airline: airline.to_string(),
        }
    }
}

/// Patterns and keyword table driving [`crate::QueryNormalizer`].
///
/// Keywords are checked in order; the first one found in the query wins.
#[derive(Debug, Clone)]
pub struct IntentRules {
    pub flight_number: Regex,
    pub bare_flight_number: Regex,
    pub destination: Regex,
    pub destination_stop_word: String,
    pub airline_keywords: Vec<AirlineKeyword>,
}

impl IntentRules {
    pub fn new(
        flight_number: &str,
        bare_flight_number: &str,
        destination: &str,
        airline_keywords: Vec<AirlineKeyword>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            flight_number: Regex::new(flight_number)?,
            bare_flight_number: Regex::new(bare_flight_number)?,
            destination: Regex::new(destination)?,
            destination_stop_word: DESTINATION_STOP_WORD.to_string(),
            airline_keywords,
        })
    }

    /// Append a keyword after the existing ones.
    pub fn with_keyword(mut self, keyword: &str, airline: &str) -> Self {
        self.airline_keywords.push(AirlineKeyword::new(keyword, airline));
        self
    }
}

impl Default for IntentRules {
    fn default() -> Self {
        Self::new(
            FLIGHT_NUMBER_PATTERN,
            BARE_FLIGHT_NUMBER_PATTERN,
            DESTINATION_PATTERN,
            default_airline_keywords(),
        )
        .expect("built-in intent patterns are valid")
    }
}

pub fn default_airline_keywords() -> Vec<AirlineKeyword> {
    vec![
        AirlineKeyword::new("american", "American Airlines"),
        AirlineKeyword::new("british", "British Airways"),
        AirlineKeyword::new("united", "United Airlines"),
        AirlineKeyword::new("delta", "Delta Air Lines"),
        AirlineKeyword::new("japan", "Japan Airlines"),
        AirlineKeyword::new("jal", "Japan Airlines"),
        AirlineKeyword::new("ana", "All Nippon Airways"),
        AirlineKeyword::new("emirates", "Emirates"),
        AirlineKeyword::new("singapore", "Singapore Airlines"),
        AirlineKeyword::new("cathay", "Cathay Pacific"),
    ]
}
