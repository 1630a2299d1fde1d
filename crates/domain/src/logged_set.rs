use chrono::NaiveDateTime;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{ExerciseID, ExerciseRecord, FormType, FormTypeError, Name};

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Duration of a timed set in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..86_400).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 86399 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// Weight in kg.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Values entered for a set. Which of them are needed depends on the form type of the exercise.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetInput {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Time>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedSet {
    pub id: SetID,
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub date_time: NaiveDateTime,
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Time>,
}

impl LoggedSet {
    /// Records a set of an exercise. Values not used by the form type of the exercise are
    /// discarded.
    pub fn new(
        id: SetID,
        exercise: &ExerciseRecord,
        date_time: NaiveDateTime,
        input: SetInput,
    ) -> Result<Self, LoggedSetError> {
        let (reps, weight, duration) = match exercise.form_type()? {
            FormType::Reps => (Some(required(input.reps, "reps")?), None, None),
            FormType::WeightReps => {
                let weight = required(input.weight, "weight")?;
                (Some(required(input.reps, "reps")?), Some(weight), None)
            }
            FormType::Timed => (None, None, Some(required(input.duration, "duration")?)),
        };

        Ok(Self {
            id,
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            date_time,
            reps,
            weight,
            duration,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, LoggedSetError> {
    value.ok_or(LoggedSetError::Missing(field))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoggedSetError {
    #[error(transparent)]
    FormType(#[from] FormTypeError),
    #[error("{0} is required")]
    Missing(&'static str),
}
