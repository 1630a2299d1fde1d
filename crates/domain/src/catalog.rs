use std::collections::{BTreeSet, HashSet};

use log::{info, warn};

use crate::{
    DataIntegrityWarning, ExerciseRecord, LoadError, MuscleCorrelationIndex, MuscleGroup,
    RoleHighlights, Row, RowSource, Table, exercise_highlights, resolve_groups,
};

/// The muscle correlation index and the exercise list, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: MuscleCorrelationIndex,
    exercises: Vec<ExerciseRecord>,
    warnings: Vec<DataIntegrityWarning>,
}

impl Catalog {
    pub fn load(source: &impl RowSource) -> Result<Self, LoadError> {
        let muscle_rows = source.muscle_rows().map_err(|err| LoadError::Read {
            table: Table::MuscleCorrelations,
            source: err,
        })?;
        let index = MuscleCorrelationIndex::build(muscle_rows)?;

        let exercise_rows = source.exercise_rows().map_err(|err| LoadError::Read {
            table: Table::Exercises,
            source: err,
        })?;
        let catalog = Self::from_rows(index, exercise_rows)?;

        info!(
            "loaded {} muscle heads and {} exercises ({} warnings)",
            catalog.index.len(),
            catalog.exercises.len(),
            catalog.warnings().count()
        );

        Ok(catalog)
    }

    /// Reads the exercises from the rows of the exercise table.
    ///
    /// Malformed rows and repeated exercise IDs are skipped and recorded as warnings.
    pub fn from_rows(
        index: MuscleCorrelationIndex,
        rows: impl IntoIterator<Item = Row>,
    ) -> Result<Self, LoadError> {
        let mut exercises = vec![];
        let mut warnings = vec![];
        let mut row_count = 0;

        for row in rows {
            if row.is_blank() {
                continue;
            }
            row_count += 1;
            match ExerciseRecord::from_row(&row, &mut warnings) {
                Ok(exercise) => exercises.push(exercise),
                Err(warning) => warnings.push(warning),
            }
        }

        if row_count == 0 {
            return Err(LoadError::Empty(Table::Exercises));
        }

        let mut catalog = Self::new(index, exercises);
        for warning in &warnings {
            warn!("{warning}");
        }
        warnings.append(&mut catalog.warnings);
        catalog.warnings = warnings;

        if catalog.exercises.is_empty() {
            return Err(LoadError::NoValidRows(Table::Exercises));
        }

        Ok(catalog)
    }

    /// Creates a catalog from already parsed exercises. Of exercises sharing an ID only the
    /// first one is kept.
    pub fn new(
        index: MuscleCorrelationIndex,
        exercises: impl IntoIterator<Item = ExerciseRecord>,
    ) -> Self {
        let mut ids = HashSet::new();
        let mut warnings = vec![];
        let exercises = exercises
            .into_iter()
            .filter(|exercise| {
                if ids.insert(exercise.id.clone()) {
                    true
                } else {
                    let warning = DataIntegrityWarning::DuplicateExerciseID(exercise.id.clone());
                    warn!("skipping exercise: {warning}");
                    warnings.push(warning);
                    false
                }
            })
            .collect();

        Self {
            index,
            exercises,
            warnings,
        }
    }

    #[must_use]
    pub fn index(&self) -> &MuscleCorrelationIndex {
        &self.index
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, id: &str) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.id.as_ref() == id)
    }

    #[must_use]
    pub fn groups_of(&self, exercise: &ExerciseRecord) -> Vec<MuscleGroup> {
        resolve_groups(exercise, &self.index)
    }

    #[must_use]
    pub fn highlights_of(&self, exercise: &ExerciseRecord) -> RoleHighlights {
        exercise_highlights(exercise, &self.index)
    }

    /// Returns the muscle groups of all exercises in alphabetical order.
    #[must_use]
    pub fn muscle_groups(&self) -> Vec<MuscleGroup> {
        self.exercises
            .iter()
            .flat_map(|e| self.groups_of(e))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn exercises_for_group(&self, group: &str) -> Vec<&ExerciseRecord> {
        self.exercises
            .iter()
            .filter(|e| self.groups_of(e).iter().any(|g| g.as_ref() == group))
            .collect()
    }

    /// Returns the warnings recorded while loading the muscle correlations and the exercises.
    pub fn warnings(&self) -> impl Iterator<Item = &DataIntegrityWarning> {
        self.index.warnings().iter().chain(&self.warnings)
    }
}
