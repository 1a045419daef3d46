use std::{collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Biceps,
    Glutes,
    Shoulders,
    Triceps,
    Abs,
    LowerBack,
    Quads,
    Hamstrings,
    Calves,
    Adductors,
    Abductors,
    Forearms,
    Trapezius,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 15] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Glutes,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
            MuscleGroup::LowerBack,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
            MuscleGroup::Adductors,
            MuscleGroup::Abductors,
            MuscleGroup::Forearms,
            MuscleGroup::Trapezius,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Adductors => "Adductors",
            MuscleGroup::Abductors => "Abductors",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Trapezius => "Trapezius",
        }
    }
}

/// Muscle groups added by the core toggle.
pub const CORE: [MuscleGroup; 2] = [MuscleGroup::Abs, MuscleGroup::LowerBack];

#[derive(Deref, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleGroupSet(BTreeSet<MuscleGroup>);

impl MuscleGroupSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the muscle group is contained after toggling.
    pub fn toggle(&mut self, muscle_group: MuscleGroup) -> bool {
        if self.0.remove(&muscle_group) {
            false
        } else {
            self.0.insert(muscle_group);
            true
        }
    }

    #[must_use]
    pub fn without(&self, muscle_group: MuscleGroup) -> Self {
        Self(
            self.0
                .iter()
                .filter(|m| **m != muscle_group)
                .copied()
                .collect(),
        )
    }

    #[must_use]
    pub fn matches(&self, muscle_groups: &[MuscleGroup]) -> bool {
        self.0.len() == muscle_groups.len() && muscle_groups.iter().all(|m| self.0.contains(m))
    }
}

impl FromIterator<MuscleGroup> for MuscleGroupSet {
    fn from_iter<T: IntoIterator<Item = MuscleGroup>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<MuscleGroup> for MuscleGroupSet {
    fn extend<T: IntoIterator<Item = MuscleGroup>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSplit {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
}

/// Base muscle groups per split, before the core toggle is applied.
///
/// No entry may contain [`MuscleGroup::LowerBack`], which only the core
/// toggle adds.
pub static WORKOUT_SPLITS: [WorkoutSplit; 5] = [
    WorkoutSplit {
        id: "full-body",
        name: "Full Body",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Hamstrings,
            MuscleGroup::Quads,
            MuscleGroup::Abs,
        ],
    },
    WorkoutSplit {
        id: "upper-body",
        name: "Upper Body",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
        ],
    },
    WorkoutSplit {
        id: "legs",
        name: "Legs",
        muscle_groups: &[
            MuscleGroup::Hamstrings,
            MuscleGroup::Quads,
            MuscleGroup::Calves,
            MuscleGroup::Glutes,
        ],
    },
    WorkoutSplit {
        id: "push",
        name: "Push",
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
        ],
    },
    WorkoutSplit {
        id: "pull",
        name: "Pull",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
];

#[must_use]
pub fn split(id: &str) -> Option<&'static WorkoutSplit> {
    WORKOUT_SPLITS.iter().find(|s| s.id == id)
}

/// Muscle groups trained by a split, with the core muscles added if enabled.
///
/// An unknown split contributes no muscle groups.
#[must_use]
pub fn build_muscle_groups(split_id: &str, core_enabled: bool) -> MuscleGroupSet {
    let mut muscle_groups: MuscleGroupSet = split(split_id)
        .map(|s| s.muscle_groups.iter().copied().collect())
        .unwrap_or_default();

    if core_enabled {
        muscle_groups.extend(CORE);
    }

    muscle_groups
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitSelection {
    pub split_id: Option<&'static str>,
    pub core_enabled: bool,
}

/// Reconstructs the split selection that produced a set of muscle groups.
///
/// The first split whose base muscle groups equal the set wins. A set that
/// matches no split yields no split id.
#[must_use]
pub fn infer_split_selection(muscle_groups: &MuscleGroupSet) -> SplitSelection {
    let core_enabled = CORE.iter().all(|m| muscle_groups.contains(m));

    let mut candidate = muscle_groups.without(MuscleGroup::LowerBack);
    let mut split_id = find_split(&candidate);

    if split_id.is_none() && core_enabled {
        candidate = candidate.without(MuscleGroup::Abs);
        split_id = find_split(&candidate);
    }

    SplitSelection {
        split_id,
        core_enabled,
    }
}

fn find_split(muscle_groups: &MuscleGroupSet) -> Option<&'static str> {
    WORKOUT_SPLITS
        .iter()
        .find(|s| muscle_groups.matches(s.muscle_groups))
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    use super::MuscleGroup::{
        Abs, Back, Biceps, Calves, Chest, Forearms, Glutes, Hamstrings, LowerBack, Quads,
        Shoulders, Triceps,
    };

    fn set<const N: usize>(muscle_groups: [MuscleGroup; N]) -> MuscleGroupSet {
        muscle_groups.into_iter().collect()
    }

    #[rstest]
    #[case(MuscleGroup::LowerBack, "lower-back")]
    #[case(MuscleGroup::Chest, "chest")]
    #[case(MuscleGroup::Trapezius, "trapezius")]
    fn test_muscle_group_string(#[case] muscle_group: MuscleGroup, #[case] string: &str) {
        assert_eq!(muscle_group.to_string(), string);
        assert_eq!(MuscleGroup::from_str(string), Ok(muscle_group));
    }

    #[test]
    fn test_muscle_group_iter_complete() {
        let muscle_groups = MuscleGroup::iter().copied().collect::<HashSet<_>>();
        assert_eq!(muscle_groups.len(), 15);
    }

    #[test]
    fn test_muscle_group_set_toggle() {
        let mut muscle_groups = MuscleGroupSet::new();

        assert!(muscle_groups.toggle(Chest));
        assert!(muscle_groups.toggle(Abs));
        assert!(!muscle_groups.toggle(Chest));
        assert_eq!(muscle_groups, set([Abs]));
    }

    #[test]
    fn test_workout_splits_duplicate_ids() {
        let mut ids = HashSet::new();

        for split in &WORKOUT_SPLITS {
            assert!(!ids.contains(split.id), "duplicate id {}", split.id);
            ids.insert(split.id);
        }
    }

    #[test]
    fn test_workout_splits_duplicate_muscle_groups() {
        for split in &WORKOUT_SPLITS {
            let muscle_groups = split.muscle_groups.iter().collect::<HashSet<_>>();
            assert_eq!(
                split.muscle_groups.len(),
                muscle_groups.len(),
                "duplicate muscle groups for \"{}\"",
                split.id
            );
        }
    }

    #[test]
    fn test_workout_splits_without_lower_back() {
        for split in &WORKOUT_SPLITS {
            assert!(
                !split.muscle_groups.contains(&LowerBack),
                "lower back in \"{}\"",
                split.id
            );
        }
    }

    #[rstest]
    #[case("push", false, set([Chest, Shoulders, Triceps]))]
    #[case("push", true, set([Chest, Shoulders, Triceps, Abs, LowerBack]))]
    #[case("pull", false, set([Back, Biceps]))]
    #[case("legs", true, set([Hamstrings, Quads, Calves, Glutes, Abs, LowerBack]))]
    #[case("full-body", true, set([Chest, Back, Shoulders, Hamstrings, Quads, Abs, LowerBack]))]
    #[case("unknown", false, set([]))]
    #[case("unknown", true, set([Abs, LowerBack]))]
    fn test_build_muscle_groups(
        #[case] split_id: &str,
        #[case] core_enabled: bool,
        #[case] expected: MuscleGroupSet,
    ) {
        assert_eq!(build_muscle_groups(split_id, core_enabled), expected);
    }

    #[test]
    fn test_build_muscle_groups_idempotent() {
        for split in &WORKOUT_SPLITS {
            let first = build_muscle_groups(split.id, true);
            let second = build_muscle_groups(split.id, true);
            assert_eq!(first, second);
            assert!(first.is_superset(&set(CORE)));
        }
    }

    #[test]
    fn test_build_muscle_groups_order() {
        assert_eq!(
            build_muscle_groups("full-body", true)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["chest", "back", "shoulders", "abs", "lower-back", "quads", "hamstrings"]
        );
    }

    #[rstest]
    #[case(set([Chest, Shoulders, Triceps, Abs, LowerBack]), Some("push"), true)]
    #[case(set([Chest, Shoulders, Triceps]), Some("push"), false)]
    #[case(set([Chest, Back, Shoulders, Hamstrings, Quads, Abs]), Some("full-body"), false)]
    #[case(set([Chest, Back, Shoulders, Hamstrings, Quads, Abs, LowerBack]), Some("full-body"), true)]
    #[case(set([Back, Biceps, LowerBack]), Some("pull"), false)]
    #[case(set([Abs, LowerBack]), None, true)]
    #[case(set([Forearms]), None, false)]
    #[case(set([]), None, false)]
    fn test_infer_split_selection(
        #[case] muscle_groups: MuscleGroupSet,
        #[case] split_id: Option<&'static str>,
        #[case] core_enabled: bool,
    ) {
        assert_eq!(
            infer_split_selection(&muscle_groups),
            SplitSelection {
                split_id,
                core_enabled
            }
        );
    }

    #[rstest]
    fn test_split_selection_round_trip(#[values(false, true)] core_enabled: bool) {
        for split in &WORKOUT_SPLITS {
            assert_eq!(
                infer_split_selection(&build_muscle_groups(split.id, core_enabled)),
                SplitSelection {
                    split_id: Some(split.id),
                    core_enabled
                },
                "round trip of \"{}\"",
                split.id
            );
        }
    }
}
