use std::slice::Iter;

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::{
    CustomWorkout, EquipmentSelection, GymType, Lift, Property, WeightSelection, WeightUnit,
};

/// Answers collected during onboarding.
///
/// Every answer is optional until the corresponding screen has been
/// completed, except for values that have a sensible default.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub first_name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub weight: Option<f32>,
    pub weight_unit: WeightUnit,
    pub reason: Option<Reason>,
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "benchPress1RM")]
    pub bench_press_1rm: Option<f32>,
    #[serde(rename = "backSquat1RM")]
    pub back_squat_1rm: Option<f32>,
    #[serde(rename = "deadlift1RM")]
    pub deadlift_1rm: Option<f32>,
    pub fitness_goal: Option<FitnessGoal>,
    pub workout_frequency: Option<TrainingFrequency>,
    pub workout_split: Option<WorkoutSplitChoice>,
    pub variety_level: Option<VarietyLevel>,
    pub training_place: Option<GymType>,
    pub selected_equipment: EquipmentSelection,
    pub dumbbell_weights: Option<WeightSelection>,
    pub plate_weights: Option<WeightSelection>,
    pub custom_workouts: Vec<CustomWorkout>,
    pub notifications_enabled: Option<bool>,
}

impl Profile {
    #[must_use]
    pub fn one_rep_max(&self, lift: Lift) -> Option<f32> {
        match lift {
            Lift::BenchPress => self.bench_press_1rm,
            Lift::BackSquat => self.back_squat_1rm,
            Lift::Deadlift => self.deadlift_1rm,
        }
    }

    pub(crate) fn apply(&mut self, field: ProfileField) {
        match field {
            ProfileField::FirstName(value) => self.first_name = value,
            ProfileField::Age(value) => self.age = value,
            ProfileField::Gender(value) => self.gender = value,
            ProfileField::Weight(value) => self.weight = value,
            ProfileField::WeightUnit(value) => self.weight_unit = value,
            ProfileField::Reason(value) => self.reason = value,
            ProfileField::ExperienceLevel(value) => self.experience_level = value,
            ProfileField::OneRepMax(Lift::BenchPress, value) => self.bench_press_1rm = value,
            ProfileField::OneRepMax(Lift::BackSquat, value) => self.back_squat_1rm = value,
            ProfileField::OneRepMax(Lift::Deadlift, value) => self.deadlift_1rm = value,
            ProfileField::FitnessGoal(value) => self.fitness_goal = value,
            ProfileField::WorkoutFrequency(value) => self.workout_frequency = value,
            ProfileField::WorkoutSplit(value) => self.workout_split = value,
            ProfileField::VarietyLevel(value) => self.variety_level = value,
            ProfileField::TrainingPlace(value) => self.training_place = value,
            ProfileField::SelectedEquipment(value) => self.selected_equipment = value,
            ProfileField::DumbbellWeights(value) => self.dumbbell_weights = value,
            ProfileField::PlateWeights(value) => self.plate_weights = value,
            ProfileField::CustomWorkouts(value) => self.custom_workouts = value,
            ProfileField::NotificationsEnabled(value) => self.notifications_enabled = value,
        }
    }
}

/// A single profile field together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileField {
    FirstName(String),
    Age(Option<u32>),
    Gender(Option<Gender>),
    Weight(Option<f32>),
    WeightUnit(WeightUnit),
    Reason(Option<Reason>),
    ExperienceLevel(Option<ExperienceLevel>),
    OneRepMax(Lift, Option<f32>),
    FitnessGoal(Option<FitnessGoal>),
    WorkoutFrequency(Option<TrainingFrequency>),
    WorkoutSplit(Option<WorkoutSplitChoice>),
    VarietyLevel(Option<VarietyLevel>),
    TrainingPlace(Option<GymType>),
    SelectedEquipment(EquipmentSelection),
    DumbbellWeights(Option<WeightSelection>),
    PlateWeights(Option<WeightSelection>),
    CustomWorkouts(Vec<CustomWorkout>),
    NotificationsEnabled(Option<bool>),
}

impl ProfileField {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::FirstName(_) => "first name",
            ProfileField::Age(_) => "age",
            ProfileField::Gender(_) => "gender",
            ProfileField::Weight(_) => "weight",
            ProfileField::WeightUnit(_) => "weight unit",
            ProfileField::Reason(_) => "reason",
            ProfileField::ExperienceLevel(_) => "experience level",
            ProfileField::OneRepMax(Lift::BenchPress, _) => "bench press 1RM",
            ProfileField::OneRepMax(Lift::BackSquat, _) => "back squat 1RM",
            ProfileField::OneRepMax(Lift::Deadlift, _) => "deadlift 1RM",
            ProfileField::FitnessGoal(_) => "fitness goal",
            ProfileField::WorkoutFrequency(_) => "workout frequency",
            ProfileField::WorkoutSplit(_) => "workout split",
            ProfileField::VarietyLevel(_) => "variety level",
            ProfileField::TrainingPlace(_) => "training place",
            ProfileField::SelectedEquipment(_) => "selected equipment",
            ProfileField::DumbbellWeights(_) => "dumbbell weights",
            ProfileField::PlateWeights(_) => "plate weights",
            ProfileField::CustomWorkouts(_) => "custom workouts",
            ProfileField::NotificationsEnabled(_) => "notifications",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
    PreferNotToSay,
}

impl Property for Gender {
    fn iter() -> Iter<'static, Gender> {
        static GENDERS: [Gender; 4] = [
            Gender::Female,
            Gender::Male,
            Gender::NonBinary,
            Gender::PreferNotToSay,
        ];
        GENDERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Reason {
    Beginner,
    Improve,
    Variation,
    Personalized,
    Structure,
}

impl Reason {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Reason::Beginner => "Get started with the basics and build a strong foundation.",
            Reason::Improve => "Fine-tune your workouts for better results.",
            Reason::Variation => "Explore new exercises and keep things fresh.",
            Reason::Personalized => "Receive a personalized program to hit your goals.",
            Reason::Structure => "Follow a structured plan and remove guesswork.",
        }
    }
}

impl Property for Reason {
    fn iter() -> Iter<'static, Reason> {
        static REASONS: [Reason; 5] = [
            Reason::Beginner,
            Reason::Improve,
            Reason::Variation,
            Reason::Personalized,
            Reason::Structure,
        ];
        REASONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Reason::Beginner => "I'm a beginner and want guidance",
            Reason::Improve => "I'm interested in improving my current training routine",
            Reason::Variation => "I'm bored of my workout plan and want more variation",
            Reason::Personalized => "I want an optimal training plan based on my specific needs",
            Reason::Structure => {
                "I want to know what to do at the gym every time without having to think about it"
            }
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExperienceLevel {
    NoExperience,
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Whether the user is asked for one-rep maxes of the main lifts.
    #[must_use]
    pub fn requires_one_rep_max(self) -> bool {
        matches!(
            self,
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced
        )
    }
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static EXPERIENCE_LEVELS: [ExperienceLevel; 4] = [
            ExperienceLevel::NoExperience,
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ];
        EXPERIENCE_LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::NoExperience => "No Experience",
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FitnessGoal {
    BuildMuscle,
    GetStronger,
    LoseFat,
    ImproveFitness,
}

impl Property for FitnessGoal {
    fn iter() -> Iter<'static, FitnessGoal> {
        static FITNESS_GOALS: [FitnessGoal; 4] = [
            FitnessGoal::BuildMuscle,
            FitnessGoal::GetStronger,
            FitnessGoal::LoseFat,
            FitnessGoal::ImproveFitness,
        ];
        FITNESS_GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessGoal::BuildMuscle => "Build muscle",
            FitnessGoal::GetStronger => "Get stronger",
            FitnessGoal::LoseFat => "Lose fat",
            FitnessGoal::ImproveFitness => "Improve overall fitness",
        }
    }
}

/// Training days per week.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrainingFrequency(u8);

impl TrainingFrequency {
    pub fn new(value: u8) -> Result<Self, TrainingFrequencyError> {
        if !(1..=7).contains(&value) {
            return Err(TrainingFrequencyError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<u8> for TrainingFrequency {
    type Error = TrainingFrequencyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TrainingFrequency::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingFrequencyError {
    #[error("Training frequency must be 1 to 7 days per week ({0} given)")]
    OutOfRange(u8),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WorkoutSplitChoice {
    FullBody,
    UpperLower,
    PushPullLegs,
    Custom,
}

impl Property for WorkoutSplitChoice {
    fn iter() -> Iter<'static, WorkoutSplitChoice> {
        static CHOICES: [WorkoutSplitChoice; 4] = [
            WorkoutSplitChoice::FullBody,
            WorkoutSplitChoice::UpperLower,
            WorkoutSplitChoice::PushPullLegs,
            WorkoutSplitChoice::Custom,
        ];
        CHOICES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutSplitChoice::FullBody => "Full Body",
            WorkoutSplitChoice::UpperLower => "Upper/Lower",
            WorkoutSplitChoice::PushPullLegs => "Push/Pull/Legs",
            WorkoutSplitChoice::Custom => "Custom",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VarietyLevel {
    Low,
    Medium,
    High,
}

impl Property for VarietyLevel {
    fn iter() -> Iter<'static, VarietyLevel> {
        static VARIETY_LEVELS: [VarietyLevel; 3] =
            [VarietyLevel::Low, VarietyLevel::Medium, VarietyLevel::High];
        VARIETY_LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            VarietyLevel::Low => "Low",
            VarietyLevel::Medium => "Medium",
            VarietyLevel::High => "High",
        }
    }
}
