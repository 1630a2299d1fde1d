use strum::Display;

use crate::{ExerciseID, MeshName, MuscleGroup, MuscleID, MuscleRole, UniqueHeadID};

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    #[strum(to_string = "muscle correlation")]
    MuscleCorrelations,
    #[strum(to_string = "exercise")]
    Exercises,
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("{0} source is empty")]
    Empty(Table),
    #[error("{0} source contains no valid rows")]
    NoValidRows(Table),
    #[error("failed to read {table} source: {source}")]
    Read {
        table: Table,
        #[source]
        source: ReadError,
    },
}

/// A per-row anomaly found while loading. The affected row or value is skipped and loading
/// continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityWarning {
    #[error("{table} row {row}: expected at least {expected} columns, found {found}")]
    ColumnCount {
        table: Table,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{table} row {row}: not valid UTF-8")]
    Undecodable { table: Table, row: usize },
    #[error("{table} row {row}: invalid {column} \"{value}\"")]
    InvalidField {
        table: Table,
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("muscle {muscle_id} is assigned to both \"{previous}\" and \"{current}\"")]
    InconsistentGroup {
        muscle_id: MuscleID,
        previous: MuscleGroup,
        current: MuscleGroup,
    },
    #[error("mesh \"{mesh_name}\" is assigned to unique heads {first} and {second}")]
    DuplicateMeshName {
        mesh_name: MeshName,
        first: UniqueHeadID,
        second: UniqueHeadID,
    },
    #[error("exercise ID \"{0}\" is not unique")]
    DuplicateExerciseID(ExerciseID),
    #[error("exercise \"{exercise_id}\": invalid {role} muscle ID \"{token}\"")]
    InvalidMuscleID {
        exercise_id: ExerciseID,
        role: MuscleRole,
        token: String,
    },
}
