pub mod rules;
pub mod normalizer;
pub mod random;
pub mod generator;
pub mod lookup;

pub use rules::{AirlineKeyword, IntentRules};
pub use normalizer::QueryNormalizer;
pub use random::ThreadRandom;
pub use generator::{FlightSynthesizer, SynthesisRequest};
pub use lookup::FlightLookup;
