use std::{
    io,
    path::{Path, PathBuf},
};

use log::info;

use crate::Error;

/// Locations and dialect of the two CSV tables.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub muscle_correlations: PathBuf,
    pub exercises: PathBuf,
    pub delimiter: char,
    pub has_headers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muscle_correlations: PathBuf::from("MuscleCoorelations.csv"),
            exercises: PathBuf::from("exerciseData.csv"),
            delimiter: ',',
            has_headers: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.delimiter_byte()?;
        Ok(settings)
    }

    /// Reads the settings from a JSON file. A missing file yields the default settings.
    pub fn read(path: &Path) -> Result<Self, Error> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub(crate) fn delimiter_byte(&self) -> Result<u8, Error> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(Error::InvalidDelimiter(self.delimiter))
    }
}
