use std::{fs::File, io, path::Path};

use log::info;
use musclemap_domain::LoggedSet;

use crate::Error;

const HEADER: [&str; 6] = ["ID", "Exercise Name", "Date", "Reps", "Weight", "Duration"];
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the sets as CSV. Values not recorded for a set are left empty.
pub fn export_sets(writer: impl io::Write, sets: &[LoggedSet]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for set in sets {
        writer.write_record([
            set.id.to_string(),
            set.exercise_name.to_string(),
            set.date_time.format(DATE_FORMAT).to_string(),
            optional(set.reps),
            optional(set.weight),
            optional(set.duration),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_sets_to_file(path: &Path, sets: &[LoggedSet]) -> Result<(), Error> {
    export_sets(File::create(path)?, sets)?;
    info!("exported {} sets to {}", sets.len(), path.display());
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
