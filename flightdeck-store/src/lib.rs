pub mod app_config;
pub mod csv_loader;
pub mod reference_store;

pub use csv_loader::CsvReferenceLoader;
pub use reference_store::ReferenceStore;
