use std::{fs::File, io, path::PathBuf};

use log::debug;
use musclemap_domain::{ReadError, Row, RowSource};

use crate::{Error, Settings};

#[derive(Debug, Clone)]
enum Input {
    Path(PathBuf),
    Text(String),
}

/// Reads the muscle correlation table and the exercise table from CSV files or strings.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    muscle_correlations: Input,
    exercises: Input,
    delimiter: u8,
    has_headers: bool,
}

impl CsvRowSource {
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Ok(Self {
            muscle_correlations: Input::Path(settings.muscle_correlations.clone()),
            exercises: Input::Path(settings.exercises.clone()),
            delimiter: settings.delimiter_byte()?,
            has_headers: settings.has_headers,
        })
    }

    /// Creates a source over in-memory tables using the default dialect.
    pub fn from_text(muscle_correlations: impl Into<String>, exercises: impl Into<String>) -> Self {
        Self {
            muscle_correlations: Input::Text(muscle_correlations.into()),
            exercises: Input::Text(exercises.into()),
            delimiter: b',',
            has_headers: true,
        }
    }

    fn read(&self, input: &Input) -> Result<Vec<Row>, ReadError> {
        match input {
            Input::Path(path) => {
                debug!("reading {}", path.display());
                let file = File::open(path).map_err(|err| match err.kind() {
                    io::ErrorKind::NotFound => ReadError::NotFound(path.display().to_string()),
                    _ => ReadError::Other(Box::new(err)),
                })?;
                self.read_rows(file)
            }
            Input::Text(text) => self.read_rows(text.as_bytes()),
        }
    }

    fn read_rows(&self, reader: impl io::Read) -> Result<Vec<Row>, ReadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = vec![];
        for (i, result) in reader.byte_records().enumerate() {
            let record = result.map_err(|err| ReadError::Other(Box::new(err)))?;
            let number = record
                .position()
                .and_then(|p| usize::try_from(p.line()).ok())
                .unwrap_or(i + 1);
            rows.push(Row::from_bytes(number, record.iter()));
        }

        Ok(rows)
    }
}

impl RowSource for CsvRowSource {
    fn muscle_rows(&self) -> Result<Vec<Row>, ReadError> {
        self.read(&self.muscle_correlations)
    }

    fn exercise_rows(&self) -> Result<Vec<Row>, ReadError> {
        self.read(&self.exercises)
    }
}
