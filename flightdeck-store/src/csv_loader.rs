use std::path::{Path, PathBuf};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use flightdeck_core::models::{Airline, Airport};
use flightdeck_core::repository::{LoadError, ReferenceLoader};

/// Reads the airline and airport tables from CSV exports of the reference
/// spreadsheets. Column headers are the spreadsheet's own.
#[derive(Debug, Clone)]
pub struct CsvReferenceLoader {
    airlines_path: PathBuf,
    airports_path: PathBuf,
}

// Internal rows mirroring the spreadsheet columns
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AirlineRow {
    airline_id: i64,
    code_iata_airline: String,
    name_airline: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AirportRow {
    airport_id: i64,
    code_iata_airport: String,
    name_airport: String,
    #[serde(default)]
    code_iso2_country: String,
    latitude_airport: Option<f64>,
    longitude_airport: Option<f64>,
    #[serde(default)]
    timezone: String,
}

impl From<AirlineRow> for Airline {
    fn from(row: AirlineRow) -> Self {
        Self {
            id: row.airline_id,
            code: row.code_iata_airline.trim().to_uppercase(),
            name: row.name_airline.trim().to_string(),
        }
    }
}

impl From<AirportRow> for Airport {
    fn from(row: AirportRow) -> Self {
        Self {
            id: row.airport_id,
            code: row.code_iata_airport.trim().to_uppercase(),
            name: row.name_airport.trim().to_string(),
            country_code: row.code_iso2_country.trim().to_string(),
            latitude: row.latitude_airport.unwrap_or_default(),
            longitude: row.longitude_airport.unwrap_or_default(),
            timezone: row.timezone.trim().to_string(),
        }
    }
}

impl CsvReferenceLoader {
    pub fn new(airlines_path: impl Into<PathBuf>, airports_path: impl Into<PathBuf>) -> Self {
        Self {
            airlines_path: airlines_path.into(),
            airports_path: airports_path.into(),
        }
    }

    pub fn airlines_path(&self) -> &Path {
        &self.airlines_path
    }

    pub fn airports_path(&self) -> &Path {
        &self.airports_path
    }
}

impl ReferenceLoader for CsvReferenceLoader {
    fn load_airlines(&self) -> Result<Vec<Airline>, LoadError> {
        read_table::<AirlineRow, Airline>(&self.airlines_path)
    }

    fn load_airports(&self) -> Result<Vec<Airport>, LoadError> {
        read_table::<AirportRow, Airport>(&self.airports_path)
    }
}

fn read_table<R, T>(path: &Path) -> Result<Vec<T>, LoadError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| to_load_error(path, e))?;

    let mut rows = Vec::new();
    for record in rdr.deserialize::<R>() {
        let row = record.map_err(|e| to_load_error(path, e))?;
        rows.push(T::from(row));
    }
    Ok(rows)
}

fn to_load_error(path: &Path, err: csv::Error) -> LoadError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io { path: path.to_path_buf(), source },
        _ => LoadError::Parse { path: path.to_path_buf(), message },
    }
}
