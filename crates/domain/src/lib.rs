#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod highlight;
mod history;
mod index;
mod logged_set;
mod muscle;
mod name;
mod resolve;
mod role;
mod row;

use std::slice::Iter;

pub use catalog::Catalog;
pub use error::{DataIntegrityWarning, LoadError, ReadError, Table};
pub use exercise::{ExerciseID, ExerciseRecord, FormType, FormTypeError, RoleMuscles};
pub use highlight::{
    Color, Highlight, RoleHighlights, default_group_colors, exercise_highlights, group_highlights,
};
pub use history::{ChartBucket, RepRange, day_buckets, exercise_names, filter_sets, week_buckets};
pub use index::MuscleCorrelationIndex;
pub use logged_set::{
    LoggedSet, LoggedSetError, Reps, RepsError, SetID, SetInput, Time, TimeError, Weight,
    WeightError,
};
pub use muscle::{HeadTypeID, MeshName, MuscleGroup, MuscleID, MuscleRecord, UniqueHeadID};
pub use name::{Name, NameError};
pub use resolve::resolve_groups;
pub use role::{ListEncoding, MuscleRole, ParsedMuscleIDs, format_muscle_ids, parse_muscle_ids};
pub use row::{Row, RowSource};

/// A closed set of values with a human readable name.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
