use flightdeck_core::search::ResolvedIntent;
use crate::rules::IntentRules;

/// Turns free text into a partial [`ResolvedIntent`] using keyword and
/// pattern matching only.
#[derive(Debug, Clone, Default)]
pub struct QueryNormalizer {
    rules: IntentRules,
}

impl QueryNormalizer {
    pub fn new(rules: IntentRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &IntentRules {
        &self.rules
    }

    /// Whole-string check for input that already is a flight number.
    pub fn is_bare_flight_number(&self, text: &str) -> bool {
        self.rules.bare_flight_number.is_match(text.trim())
    }

    /// Bare flight numbers pass straight through; anything else goes
    /// through [`Self::normalize`].
    pub fn resolve(&self, text: &str) -> ResolvedIntent {
        let trimmed = text.trim();
        if self.is_bare_flight_number(trimmed) {
            return ResolvedIntent {
                flight_number: Some(trimmed.to_string()),
                ..Default::default()
            };
        }
        self.normalize(text)
    }

    /// Each field is extracted independently; any of them may be absent.
    pub fn normalize(&self, text: &str) -> ResolvedIntent {
        let lower = text.to_lowercase();
        ResolvedIntent {
            flight_number: self.extract_flight_number(text),
            airline: self.extract_airline(&lower),
            destination: self.extract_destination(&lower),
        }
    }

    fn extract_flight_number(&self, text: &str) -> Option<String> {
        self.rules
            .flight_number
            .find(text)
            .map(|m| m.as_str().to_uppercase())
    }

    fn extract_destination(&self, lower: &str) -> Option<String> {
        let captured = self.rules.destination.captures(lower)?.get(1)?.as_str().trim();
        let phrase = captured
            .split(self.rules.destination_stop_word.as_str())
            .next()
            .unwrap_or(captured)
            .trim();
        capitalize_first(phrase)
    }

    fn extract_airline(&self, lower: &str) -> Option<String> {
        self.rules
            .airline_keywords
            .iter()
            .find(|k| lower.contains(k.keyword.as_str()))
            .map(|k| k.airline.clone())
    }
}

fn capitalize_first(phrase: &str) -> Option<String> {
    let mut chars = phrase.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> ResolvedIntent {
        QueryNormalizer::default().normalize(text)
    }

    #[test]
    fn test_flight_number_only() {
        let intent = normalize("AA123");
        assert_eq!(intent.flight_number.as_deref(), Some("AA123"));
        assert_eq!(intent.airline, None);
        assert_eq!(intent.destination, None);
    }

    #[test]
    fn test_flight_number_found_inside_text_and_uppercased() {
        let intent = normalize("where is jal0042 right now");
        assert_eq!(intent.flight_number.as_deref(), Some("JAL0042"));
        assert_eq!(intent.airline.as_deref(), Some("Japan Airlines"));
    }

    #[test]
    fn test_airline_and_destination() {
        let intent = normalize("american to london");
        assert_eq!(intent.airline.as_deref(), Some("American Airlines"));
        assert_eq!(intent.destination.as_deref(), Some("London"));
        assert_eq!(intent.flight_number, None);
    }

    #[test]
    fn test_destination_stops_at_from() {
        let intent = normalize("Flights to New York from Boston");
        assert_eq!(intent.destination.as_deref(), Some("New york"));
    }

    #[test]
    fn test_destination_requires_the_word_to() {
        assert_eq!(normalize("flights toronto").destination, None);
        assert_eq!(normalize("united to").destination, None);
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // Both "british" and "american" appear; "american" is earlier in the table.
        let intent = normalize("british or american");
        assert_eq!(intent.airline.as_deref(), Some("American Airlines"));
    }

    #[test]
    fn test_nothing_resolved() {
        assert!(normalize("hello there").is_empty());
    }

    #[test]
    fn test_custom_keyword() {
        let rules = IntentRules::default().with_keyword("Qantas", "Qantas Airways");
        let intent = QueryNormalizer::new(rules).normalize("qantas to sydney");
        assert_eq!(intent.airline.as_deref(), Some("Qantas Airways"));
        assert_eq!(intent.destination.as_deref(), Some("Sydney"));
    }

    #[test]
    fn test_bare_flight_number_short_circuit() {
        let normalizer = QueryNormalizer::default();
        assert!(normalizer.is_bare_flight_number("ua1"));
        assert!(normalizer.is_bare_flight_number(" BA456 "));
        assert!(!normalizer.is_bare_flight_number("BA45678"));
        assert!(!normalizer.is_bare_flight_number("BA456 to paris"));

        // Passed through as typed, even where the heuristic pattern would not match.
        let intent = normalizer.resolve("ua1");
        assert_eq!(intent.flight_number.as_deref(), Some("ua1"));
        assert_eq!(intent.destination, None);
    }
}
