use std::slice::Iter;

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Lift {
    BenchPress,
    BackSquat,
    Deadlift,
}

impl Property for Lift {
    fn iter() -> Iter<'static, Lift> {
        static LIFTS: [Lift; 3] = [Lift::BenchPress, Lift::BackSquat, Lift::Deadlift];
        LIFTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Lift::BenchPress => "Bench Press",
            Lift::BackSquat => "Back Squat",
            Lift::Deadlift => "Deadlift",
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..=30).contains(&value) {
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
    #[error("Reps must be in the range 1 to 30")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct LiftWeight(f32);

impl LiftWeight {
    pub fn new(value: f32) -> Result<Self, LiftWeightError> {
        if value.is_nan() || value <= 0.0 || value > 2000.0 {
            return Err(LiftWeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for LiftWeight {
    type Error = LiftWeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => LiftWeight::new(parsed_value),
            Err(_) => Err(LiftWeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LiftWeightError {
    #[error("Weight must be greater than 0 and at most 2000")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Estimated one-rep max using the Epley formula, rounded to a whole unit.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn one_rep_max(weight: LiftWeight, reps: Reps) -> f32 {
    if reps.0 == 1 {
        return weight.0.round();
    }
    (weight.0 * (1.0 + reps.0 as f32 / 30.0)).round()
}

/// Calculator input as entered by the user, `None` if either value is invalid.
#[must_use]
pub fn calculate_one_rep_max(weight: &str, reps: &str) -> Option<f32> {
    let weight = LiftWeight::try_from(weight).ok()?;
    let reps = Reps::try_from(reps).ok()?;
    Some(one_rep_max(weight, reps))
}
