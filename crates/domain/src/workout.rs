use derive_more::{Deref, Display};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{
    MuscleGroup, MuscleGroupSet, build_muscle_groups, infer_split_selection,
    split::{self, WORKOUT_SPLITS},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWorkout {
    pub id: WorkoutID,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    #[serde(rename = "muscleGroups")]
    pub muscle_groups: MuscleGroupSet,
}

/// Serialized as an uuid string. Other strings are mapped to a name-based
/// uuid, so that the same string always yields the same id.
#[derive(Deref, Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Uuid::parse_str(value) {
            Ok(uuid) => Self(uuid),
            Err(_) => {
                debug!("map workout id {value} to name-based uuid");
                Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, value.as_bytes()))
            }
        }
    }
}

impl<'de> Deserialize<'de> for WorkoutID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutKind {
    #[default]
    WorkoutSplit,
    Custom,
}

/// State of the dialog for adding or editing a custom workout.
///
/// The split tab allows at most one split option plus the core toggle, the
/// custom tab any combination of muscle groups.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutEditor {
    editing: Option<WorkoutID>,
    tab: WorkoutKind,
    split_id: Option<&'static str>,
    core_enabled: bool,
    muscle_groups: MuscleGroupSet,
}

impl WorkoutEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn edit(workout: &CustomWorkout) -> Self {
        let mut editor = Self {
            editing: Some(workout.id),
            tab: workout.kind,
            ..Self::default()
        };

        match workout.kind {
            WorkoutKind::WorkoutSplit => {
                let selection = infer_split_selection(&workout.muscle_groups);
                if selection.split_id.is_none() {
                    warn!(
                        "no workout split matches muscle groups of workout {}",
                        workout.id
                    );
                }
                editor.split_id = selection.split_id;
                editor.core_enabled = selection.core_enabled;
            }
            WorkoutKind::Custom => {
                editor.muscle_groups = workout.muscle_groups.clone();
            }
        }

        editor
    }

    #[must_use]
    pub fn editing(&self) -> Option<WorkoutID> {
        self.editing
    }

    #[must_use]
    pub fn tab(&self) -> WorkoutKind {
        self.tab
    }

    #[must_use]
    pub fn split_id(&self) -> Option<&'static str> {
        self.split_id
    }

    #[must_use]
    pub fn core_enabled(&self) -> bool {
        self.core_enabled
    }

    #[must_use]
    pub fn muscle_groups(&self) -> &MuscleGroupSet {
        &self.muscle_groups
    }

    pub fn select_tab(&mut self, tab: WorkoutKind) {
        self.tab = tab;
    }

    /// Selects the split option, or deselects it if it is already selected.
    pub fn toggle_split(&mut self, split_id: &str) {
        let Some(split) = split::split(split_id) else {
            warn!("ignored unknown workout split {split_id}");
            return;
        };

        if self.split_id == Some(split.id) {
            self.split_id = None;
        } else {
            self.split_id = Some(split.id);
        }
    }

    pub fn toggle_core(&mut self) {
        self.core_enabled = !self.core_enabled;
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        self.muscle_groups.toggle(muscle_group);
    }

    #[must_use]
    pub fn has_selections(&self) -> bool {
        match self.tab {
            WorkoutKind::WorkoutSplit => self.split_id.is_some() || self.core_enabled,
            WorkoutKind::Custom => !self.muscle_groups.is_empty(),
        }
    }

    /// The workout described by the current selections of the active tab.
    ///
    /// An edited workout keeps its id. The split tab requires a split option
    /// even if the core toggle is enabled.
    #[must_use]
    pub fn build(&self) -> Option<CustomWorkout> {
        let id = self.editing.unwrap_or_else(WorkoutID::new);

        match self.tab {
            WorkoutKind::WorkoutSplit => {
                let split = WORKOUT_SPLITS.iter().find(|s| Some(s.id) == self.split_id)?;
                Some(CustomWorkout {
                    id,
                    name: split.name.to_string(),
                    kind: WorkoutKind::WorkoutSplit,
                    muscle_groups: build_muscle_groups(split.id, self.core_enabled),
                })
            }
            WorkoutKind::Custom => {
                if self.muscle_groups.is_empty() {
                    return None;
                }
                Some(CustomWorkout {
                    id,
                    name: "Custom".to_string(),
                    kind: WorkoutKind::Custom,
                    muscle_groups: self.muscle_groups.clone(),
                })
            }
        }
    }
}
