#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod csv_source;
mod export;
mod settings;

pub use csv_source::CsvRowSource;
pub use export::{export_sets, export_sets_to_file};
pub use settings::Settings;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("delimiter must be an ASCII character: {0:?}")]
    InvalidDelimiter(char),
}
