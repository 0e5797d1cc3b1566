use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use flightdeck_core::models::Flight;
use flightdeck_core::{CoreError, RecentSearches};
use flightdeck_search::{FlightLookup, ThreadRandom};
use flightdeck_store::{CsvReferenceLoader, ReferenceStore};

#[derive(Parser)]
#[command(author, version, about = "Track mock flights from the terminal", long_about = None)]
struct Cli {
    /// Airline reference table (CSV)
    #[arg(long, env = "FLIGHTDECK_AIRLINES", default_value = "data/airlines.csv")]
    airlines: PathBuf,

    /// Airport reference table (CSV)
    #[arg(long, env = "FLIGHTDECK_AIRPORTS", default_value = "data/airports.csv")]
    airports: PathBuf,

    /// Travel date, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Flight number or free text, e.g. "AA123" or "american to london".
    /// Starts an interactive session when omitted.
    query: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let loader = CsvReferenceLoader::new(&cli.airlines, &cli.airports);
    let store = Arc::new(ReferenceStore::new(Arc::new(loader)));
    let lookup = FlightLookup::new(store, Arc::new(ThreadRandom));
    let mut history = RecentSearches::new();

    if !cli.query.is_empty() {
        track(&lookup, &mut history, &cli.query.join(" "), cli.date);
        return Ok(());
    }

    println!("Enter a flight number or a question. Commands: history, clear, quit");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "history" => print_history(&history),
            "clear" => {
                history.clear();
                println!("History cleared");
            }
            text => track(&lookup, &mut history, text, cli.date),
        }
    }
    Ok(())
}

fn track(lookup: &FlightLookup, history: &mut RecentSearches, text: &str, date: Option<NaiveDate>) {
    match lookup.search_text(text, date, Utc::now().naive_utc()) {
        Ok(flights) if flights.is_empty() => println!("No flights found"),
        Ok(flights) => {
            for flight in &flights {
                println!("{}", render_flight(flight));
            }
            history.push(flights[0].clone());
        }
        Err(CoreError::Unresolved(_)) => {
            eprintln!("Sorry, I couldn't work out a flight number or airline from that")
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn print_history(history: &RecentSearches) {
    if history.is_empty() {
        println!("No recent searches");
        return;
    }
    for flight in history.iter() {
        println!(
            "  {:<8} {} {} -> {}",
            flight.flight_number, flight.airline, flight.departure.airport, flight.arrival.airport
        );
    }
}

fn render_flight(flight: &Flight) -> String {
    format!(
        "{} {} [{}]\n  {} {} ({})  ->  {} {} ({})  {}\n  {}  ->  {}",
        flight.flight_number,
        flight.airline,
        flight.status,
        flight.departure.airport,
        flight.departure.time.format("%Y-%m-%d %H:%M"),
        flight.departure.timezone,
        flight.arrival.airport,
        flight.arrival.time.format("%Y-%m-%d %H:%M"),
        flight.arrival.timezone,
        flight.duration,
        flight.departure.location,
        flight.arrival.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_core::models::{FlightEndpoint, FlightStatus};

    #[test]
    fn test_render_flight() {
        let time = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap().and_hms_opt(14, 0, 0).unwrap();
        let flight = Flight {
            id: "0-0".to_string(),
            flight_number: "AA123".to_string(),
            airline: "American Airlines".to_string(),
            status: FlightStatus::OnTime,
            departure: FlightEndpoint {
                location: "John F Kennedy Intl, US".to_string(),
                airport: "JFK".to_string(),
                time,
                timezone: "America/New_York".to_string(),
            },
            arrival: FlightEndpoint {
                location: "London".to_string(),
                airport: "LHR".to_string(),
                time: time + chrono::Duration::hours(6),
                timezone: "Europe/London".to_string(),
            },
            duration: "6h 0m".to_string(),
        };

        let rendered = render_flight(&flight);
        assert!(rendered.starts_with("AA123 American Airlines [On Time]"));
        assert!(rendered.contains("JFK 2025-12-08 14:00 (America/New_York)"));
        assert!(rendered.contains("LHR 2025-12-08 20:00 (Europe/London)"));
        assert!(rendered.ends_with("John F Kennedy Intl, US  ->  London"));
    }

    #[test]
    fn test_cli_parses_query_words() {
        let cli = Cli::parse_from(["flightdeck", "--date", "2025-12-08", "american", "to", "london"]);
        assert_eq!(cli.query.join(" "), "american to london");
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 12, 8));
        assert_eq!(cli.airlines, PathBuf::from("data/airlines.csv"));
    }
}
