use std::{borrow::Borrow, slice::Iter};

use derive_more::Display;

use crate::{
    DataIntegrityWarning, MuscleID, MuscleRole, Name, Property, Row, Table, parse_muscle_ids,
};

#[derive(Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ExerciseID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: ExerciseID,
    pub name: Name,
    /// Raw form type code, validated by [`ExerciseRecord::form_type`].
    pub form_type_id: String,
    pub muscles: RoleMuscles,
}

mod column {
    pub const NAME: usize = 0;
    pub const ID: usize = 1;
    pub const FORM_TYPE_ID: usize = 7;
    pub const TARGET: usize = 17;
    pub const SYNERGIST: usize = 19;
    pub const DYNAMIC_STABILIZER: usize = 21;
    pub const STABILIZER: usize = 23;
    pub const ANTAGONIST_STABILIZER: usize = 25;
    pub const COUNT: usize = 26;
}

impl ExerciseRecord {
    /// Reads an exercise from a row of the exercise table.
    ///
    /// Rows lacking columns, an ID or a name are rejected, as are rows that are not valid UTF-8.
    /// Invalid muscle ID tokens and an invalid form type are reported in `warnings` but do not
    /// reject the row.
    pub fn from_row(
        row: &Row,
        warnings: &mut Vec<DataIntegrityWarning>,
    ) -> Result<Self, DataIntegrityWarning> {
        if row.len() < column::COUNT {
            return Err(DataIntegrityWarning::ColumnCount {
                table: Table::Exercises,
                row: row.number,
                expected: column::COUNT,
                found: row.len(),
            });
        }

        if row.is_undecodable() {
            return Err(DataIntegrityWarning::Undecodable {
                table: Table::Exercises,
                row: row.number,
            });
        }

        let text = |index: usize| row.field(index).unwrap_or_default();
        let invalid = |index: usize, column: &'static str| DataIntegrityWarning::InvalidField {
            table: Table::Exercises,
            row: row.number,
            column,
            value: text(index).to_string(),
        };

        let id = match text(column::ID) {
            "" => return Err(invalid(column::ID, "exercise ID")),
            id => ExerciseID::from(id),
        };
        let name =
            Name::new(text(column::NAME)).map_err(|_| invalid(column::NAME, "exercise name"))?;

        let form_type_id = text(column::FORM_TYPE_ID).to_string();
        if FormType::try_from(form_type_id.as_str()).is_err() {
            warnings.push(invalid(column::FORM_TYPE_ID, "form type ID"));
        }

        let mut muscles = RoleMuscles::default();
        for (role, index) in [
            (MuscleRole::Target, column::TARGET),
            (MuscleRole::Synergist, column::SYNERGIST),
            (MuscleRole::DynamicStabilizer, column::DYNAMIC_STABILIZER),
            (MuscleRole::Stabilizer, column::STABILIZER),
            (MuscleRole::AntagonistStabilizer, column::ANTAGONIST_STABILIZER),
        ] {
            let parsed = parse_muscle_ids(text(index));
            warnings.extend(parsed.invalid.into_iter().map(|token| {
                DataIntegrityWarning::InvalidMuscleID {
                    exercise_id: id.clone(),
                    role,
                    token,
                }
            }));
            muscles.set(role, parsed.ids);
        }

        Ok(Self {
            id,
            name,
            form_type_id,
            muscles,
        })
    }

    pub fn form_type(&self) -> Result<FormType, FormTypeError> {
        FormType::try_from(self.form_type_id.as_str())
    }
}

/// Muscle IDs of an exercise per role.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoleMuscles([Vec<MuscleID>; 5]);

impl RoleMuscles {
    #[must_use]
    pub fn get(&self, role: MuscleRole) -> &[MuscleID] {
        &self.0[role.index()]
    }

    pub fn set(&mut self, role: MuscleRole, ids: Vec<MuscleID>) {
        self.0[role.index()] = ids;
    }

    /// Sets the muscles of `role` from a serialized muscle ID list, dropping invalid tokens.
    #[must_use]
    pub fn with(mut self, role: MuscleRole, field: &str) -> Self {
        self.set(role, parse_muscle_ids(field).ids);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (MuscleRole, &[MuscleID])> {
        MuscleRole::iter().map(|role| (*role, self.get(*role)))
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum FormType {
    Reps = 1,
    WeightReps = 2,
    Timed = 3,
}

impl Property for FormType {
    fn iter() -> Iter<'static, FormType> {
        static FORM_TYPES: [FormType; 3] = [FormType::Reps, FormType::WeightReps, FormType::Timed];
        FORM_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FormType::Reps => "Reps",
            FormType::WeightReps => "Weight and Reps",
            FormType::Timed => "Timed",
        }
    }
}

impl TryFrom<u32> for FormType {
    type Error = FormTypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FormType::Reps),
            2 => Ok(FormType::WeightReps),
            3 => Ok(FormType::Timed),
            _ => Err(FormTypeError::Invalid(value)),
        }
    }
}

impl TryFrom<&str> for FormType {
    type Error = FormTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => FormType::try_from(parsed_value),
            Err(_) => Err(FormTypeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormTypeError {
    #[error("Form type must be 1, 2 or 3 ({0})")]
    Invalid(u32),
    #[error("Form type must be an integer")]
    ParseError,
}
