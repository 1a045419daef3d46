#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod display;
pub mod equipment;
pub mod gym;
pub mod log;
pub mod profile;
pub mod split;
pub mod store;
pub mod strength;
pub mod weights;
pub mod workout;

use std::slice::Iter;

pub use display::{CategoryGroup, EquipmentGroup, group_by_category, group_for_display, search};
pub use equipment::{EquipmentCategory, EquipmentItem, EquipmentSelection};
pub use gym::{GymType, default_equipment};
pub use profile::{
    ExperienceLevel, FitnessGoal, Gender, Profile, ProfileField, Reason, TrainingFrequency,
    TrainingFrequencyError, VarietyLevel, WorkoutSplitChoice,
};
pub use split::{
    MuscleGroup, MuscleGroupSet, SplitSelection, WORKOUT_SPLITS, WorkoutSplit,
    build_muscle_groups, infer_split_selection,
};
pub use store::OnboardingStore;
pub use strength::{Lift, LiftWeight, LiftWeightError, Reps, RepsError, one_rep_max};
pub use weights::{DEFAULT_PLATE_WEIGHTS, WeightSelection, WeightUnit, default_dumbbell_weights};
pub use workout::{CustomWorkout, WorkoutEditor, WorkoutID, WorkoutKind};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
