use log::{debug, warn};

use crate::{
    CustomWorkout, DEFAULT_PLATE_WEIGHTS, EquipmentItem, GymType, Lift,
    Profile, ProfileField, WeightSelection, WorkoutEditor, WorkoutID, WorkoutSplitChoice,
    default_dumbbell_weights, default_equipment,
};

const PLATES: &str = "plates";
const DUMBBELLS: &str = "dumbbells";

/// Owner of the profile while onboarding is in progress.
///
/// The store is handed to each screen explicitly; screens read the profile
/// and change it only through the methods below.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OnboardingStore {
    profile: Profile,
}

impl OnboardingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    pub fn update_field(&mut self, field: ProfileField) {
        debug!("update {}", field.name());
        self.profile.apply(field);
    }

    /// Applies all fields at once. Later fields win if a field is given twice.
    pub fn update_multiple_fields(&mut self, fields: impl IntoIterator<Item = ProfileField>) {
        let mut profile = self.profile.clone();
        for field in fields {
            debug!("update {}", field.name());
            profile.apply(field);
        }
        self.profile = profile;
    }

    pub fn reset(&mut self) {
        debug!("reset profile");
        self.profile = Profile::default();
    }

    /// Selects the training place and replaces the equipment selection by its defaults.
    pub fn select_training_place(&mut self, gym_type: GymType) {
        let equipment = default_equipment(gym_type);
        debug!(
            "select {gym_type} with {} default equipment items",
            equipment.len()
        );

        let mut fields = vec![
            ProfileField::TrainingPlace(Some(gym_type)),
            ProfileField::SelectedEquipment(equipment.clone()),
        ];
        if equipment.contains(PLATES) {
            fields.push(ProfileField::PlateWeights(Some(WeightSelection::new(
                &DEFAULT_PLATE_WEIGHTS,
            ))));
        }
        if equipment.contains(DUMBBELLS) {
            fields.push(ProfileField::DumbbellWeights(Some(WeightSelection::new(
                &default_dumbbell_weights(),
            ))));
        }
        self.update_multiple_fields(fields);
    }

    /// Prepares the equipment selection when the equipment screen is opened.
    ///
    /// An existing selection is kept. An empty selection is replaced by the
    /// defaults of the training place. Weights of selected plates and
    /// dumbbells are initialized if they have never been set.
    pub fn initialize_equipment(&mut self) {
        if let Some(gym_type) = self
            .profile
            .training_place
            .filter(|_| self.profile.selected_equipment.is_empty())
        {
            self.profile.selected_equipment = default_equipment(gym_type);
        }

        if self.profile.selected_equipment.contains(PLATES) && self.profile.plate_weights.is_none()
        {
            self.profile.plate_weights = Some(WeightSelection::new(&DEFAULT_PLATE_WEIGHTS));
        }
        if self.profile.selected_equipment.contains(DUMBBELLS)
            && self.profile.dumbbell_weights.is_none()
        {
            self.profile.dumbbell_weights =
                Some(WeightSelection::new(&default_dumbbell_weights()));
        }
    }

    /// Returns whether the equipment is selected after toggling.
    pub fn toggle_equipment(&mut self, id: &str) -> bool {
        if crate::catalog::equipment(id).is_none() {
            warn!("ignored unknown equipment {id}");
            return self.profile.selected_equipment.contains(id);
        }
        self.profile.selected_equipment.toggle(id)
    }

    pub fn select_all_equipment(&mut self, items: &[&EquipmentItem]) {
        self.profile
            .selected_equipment
            .select_all(items.iter().map(|e| e.id));
    }

    pub fn deselect_all_equipment(&mut self) {
        self.profile.selected_equipment.deselect_all();
    }

    pub fn toggle_dumbbell_weight(&mut self, weight: f32) -> bool {
        self.profile
            .dumbbell_weights
            .get_or_insert_with(|| WeightSelection::new(&default_dumbbell_weights()))
            .toggle(weight)
    }

    pub fn toggle_all_dumbbell_weights(&mut self) {
        let available = default_dumbbell_weights();
        self.profile
            .dumbbell_weights
            .get_or_insert_with(|| WeightSelection::new(&available))
            .toggle_all(&available);
    }

    pub fn toggle_plate_weight(&mut self, weight: f32) -> bool {
        self.profile
            .plate_weights
            .get_or_insert_with(|| WeightSelection::new(&DEFAULT_PLATE_WEIGHTS))
            .toggle(weight)
    }

    pub fn toggle_all_plate_weights(&mut self) {
        self.profile
            .plate_weights
            .get_or_insert_with(|| WeightSelection::new(&DEFAULT_PLATE_WEIGHTS))
            .toggle_all(&DEFAULT_PLATE_WEIGHTS);
    }

    #[must_use]
    pub fn workout(&self, id: WorkoutID) -> Option<&CustomWorkout> {
        self.profile.custom_workouts.iter().find(|w| w.id == id)
    }

    /// Stores the workout built by the editor.
    ///
    /// An edited workout is replaced in place, any other workout is appended.
    pub fn save_workout(&mut self, editor: &WorkoutEditor) -> Option<WorkoutID> {
        let workout = editor.build()?;
        let id = workout.id;
        let workouts = &mut self.profile.custom_workouts;

        match workouts
            .iter_mut()
            .find(|w| editor.editing() == Some(w.id))
        {
            Some(existing) => {
                debug!("replace workout {id}");
                *existing = workout;
            }
            None => {
                debug!("add workout {id}");
                workouts.push(workout);
            }
        }
        self.profile.workout_split = Some(WorkoutSplitChoice::Custom);

        Some(id)
    }

    pub fn delete_workout(&mut self, id: WorkoutID) -> bool {
        let len = self.profile.custom_workouts.len();
        self.profile.custom_workouts.retain(|w| w.id != id);

        if self.profile.custom_workouts.len() == len {
            warn!("ignored deletion of unknown workout {id}");
            return false;
        }

        debug!("delete workout {id}");
        true
    }

    pub fn apply_one_rep_max(&mut self, lift: Lift, value: f32) {
        self.update_field(ProfileField::OneRepMax(lift, Some(value)));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        EquipmentSelection, ExperienceLevel, MuscleGroup, MuscleGroupSet, WeightUnit,
        WorkoutKind, display,
    };

    #[test]
    fn test_update_field() {
        let mut store = OnboardingStore::new();

        store.update_field(ProfileField::FirstName("Alex".to_string()));
        store.update_field(ProfileField::Age(Some(29)));

        assert_eq!(
            *store.profile(),
            Profile {
                first_name: "Alex".to_string(),
                age: Some(29),
                ..Profile::default()
            }
        );
    }

    #[test]
    fn test_update_field_replaces_value() {
        let mut store = OnboardingStore::new();

        store.update_field(ProfileField::WeightUnit(WeightUnit::KG));
        store.update_field(ProfileField::WeightUnit(WeightUnit::LB));

        assert_eq!(*store.profile(), Profile::default());
    }

    #[test]
    fn test_update_multiple_fields() {
        let mut store = OnboardingStore::new();

        store.update_multiple_fields([
            ProfileField::Weight(Some(72.5)),
            ProfileField::WeightUnit(WeightUnit::KG),
            ProfileField::ExperienceLevel(Some(ExperienceLevel::Beginner)),
            ProfileField::ExperienceLevel(Some(ExperienceLevel::Advanced)),
        ]);

        assert_eq!(store.profile().weight, Some(72.5));
        assert_eq!(store.profile().weight_unit, WeightUnit::KG);
        assert_eq!(
            store.profile().experience_level,
            Some(ExperienceLevel::Advanced)
        );
        assert_eq!(store.profile().first_name, "");
    }

    #[test]
    fn test_reset() {
        let mut store = OnboardingStore::new();
        store.update_field(ProfileField::FirstName("Alex".to_string()));
        store.select_training_place(GymType::LargeGym);

        store.reset();

        assert_eq!(store, OnboardingStore::new());
    }

    #[rstest]
    #[case(GymType::LargeGym)]
    #[case(GymType::SmallGym)]
    #[case(GymType::GarageGym)]
    fn test_select_training_place(#[case] gym_type: GymType) {
        let mut store = OnboardingStore::new();

        store.select_training_place(gym_type);

        let profile = store.profile();
        assert_eq!(profile.training_place, Some(gym_type));
        assert_eq!(profile.selected_equipment, default_equipment(gym_type));
        assert_eq!(
            profile.plate_weights,
            Some(WeightSelection::new(&DEFAULT_PLATE_WEIGHTS))
        );
        assert_eq!(
            profile.dumbbell_weights.as_ref().map(|w| w.len()),
            Some(31)
        );
    }

    #[test]
    fn test_select_training_place_replaces_selection() {
        let mut store = OnboardingStore::new();
        store.select_training_place(GymType::LargeGym);
        store.toggle_equipment("treadmill");

        store.select_training_place(GymType::GarageGym);

        assert!(!store.profile().selected_equipment.contains("treadmill"));
        assert_eq!(store.profile().selected_equipment.len(), 9);
    }

    #[test]
    fn test_initialize_equipment_defaults() {
        let mut store = OnboardingStore::new();
        store.update_field(ProfileField::TrainingPlace(Some(GymType::SmallGym)));

        store.initialize_equipment();

        assert_eq!(
            store.profile().selected_equipment,
            default_equipment(GymType::SmallGym)
        );
        assert!(store.profile().plate_weights.is_some());
        assert!(store.profile().dumbbell_weights.is_some());
    }

    #[test]
    fn test_initialize_equipment_keeps_selection() {
        let mut store = OnboardingStore::new();
        store.update_multiple_fields([
            ProfileField::TrainingPlace(Some(GymType::LargeGym)),
            ProfileField::SelectedEquipment(["plates"].into_iter().collect()),
            ProfileField::PlateWeights(Some(WeightSelection::new(&[]))),
        ]);

        store.initialize_equipment();

        assert_eq!(
            store.profile().selected_equipment,
            ["plates"].into_iter().collect::<EquipmentSelection>()
        );
        assert_eq!(store.profile().plate_weights, Some(WeightSelection::new(&[])));
        assert_eq!(store.profile().dumbbell_weights, None);
    }

    #[test]
    fn test_initialize_equipment_without_training_place() {
        let mut store = OnboardingStore::new();

        store.initialize_equipment();

        assert_eq!(store, OnboardingStore::new());
    }

    #[test]
    fn test_toggle_equipment() {
        let mut store = OnboardingStore::new();

        assert!(store.toggle_equipment("sled"));
        assert!(!store.toggle_equipment("sled"));
        assert!(!store.toggle_equipment("jet_pack"));
        assert!(store.profile().selected_equipment.is_empty());
    }

    #[test]
    fn test_select_all_equipment() {
        let mut store = OnboardingStore::new();
        let cardio = display::search("cardio");

        store.select_all_equipment(&cardio);
        assert_eq!(store.profile().selected_equipment.len(), 8);

        store.deselect_all_equipment();
        assert!(store.profile().selected_equipment.is_empty());
    }

    #[test]
    fn test_toggle_weights_from_defaults() {
        let mut store = OnboardingStore::new();

        assert!(!store.toggle_plate_weight(45.0));
        assert_eq!(store.profile().plate_weights.as_ref().map(|w| w.len()), Some(9));

        store.toggle_all_plate_weights();
        assert_eq!(
            store.profile().plate_weights,
            Some(WeightSelection::new(&DEFAULT_PLATE_WEIGHTS))
        );
        store.toggle_all_plate_weights();
        assert_eq!(store.profile().plate_weights, Some(WeightSelection::new(&[])));

        assert!(!store.toggle_dumbbell_weight(2.5));
        assert!(store.toggle_dumbbell_weight(2.5));
        store.toggle_all_dumbbell_weights();
        assert_eq!(
            store.profile().dumbbell_weights,
            Some(WeightSelection::new(&[]))
        );
    }

    #[test]
    fn test_save_workout() {
        let mut store = OnboardingStore::new();
        let mut editor = WorkoutEditor::new();
        editor.toggle_split("legs");

        let id = store.save_workout(&editor).unwrap();

        let workout = store.workout(id).unwrap();
        assert_eq!(workout.name, "Legs");
        assert_eq!(workout.kind, WorkoutKind::WorkoutSplit);
        assert_eq!(
            store.profile().workout_split,
            Some(WorkoutSplitChoice::Custom)
        );
    }

    #[test]
    fn test_save_workout_without_selection() {
        let mut store = OnboardingStore::new();

        assert_eq!(store.save_workout(&WorkoutEditor::new()), None);
        assert!(store.profile().custom_workouts.is_empty());
        assert_eq!(store.profile().workout_split, None);
    }

    #[test]
    fn test_save_edited_workout() {
        let mut store = OnboardingStore::new();
        let mut editor = WorkoutEditor::new();
        editor.toggle_split("push");
        editor.toggle_core();
        let first = store.save_workout(&editor).unwrap();
        editor = WorkoutEditor::new();
        editor.toggle_split("pull");
        let second = store.save_workout(&editor).unwrap();

        let mut editor = WorkoutEditor::edit(store.workout(first).unwrap());
        assert_eq!(editor.split_id(), Some("push"));
        assert!(editor.core_enabled());
        editor.select_tab(WorkoutKind::Custom);
        editor.toggle_muscle_group(MuscleGroup::Forearms);

        assert_eq!(store.save_workout(&editor), Some(first));

        let workouts = &store.profile().custom_workouts;
        assert_eq!(
            workouts.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![first, second]
        );
        assert_eq!(workouts[0].kind, WorkoutKind::Custom);
        assert_eq!(
            workouts[0].muscle_groups,
            [MuscleGroup::Forearms].into_iter().collect::<MuscleGroupSet>()
        );
    }

    #[test]
    fn test_delete_workout() {
        let mut store = OnboardingStore::new();
        let mut editor = WorkoutEditor::new();
        editor.toggle_split("pull");
        let id = store.save_workout(&editor).unwrap();

        assert!(store.delete_workout(id));
        assert!(!store.delete_workout(id));
        assert_eq!(store.workout(id), None);
    }

    #[test]
    fn test_apply_one_rep_max() {
        let mut store = OnboardingStore::new();

        store.apply_one_rep_max(Lift::Deadlift, 180.0);

        assert_eq!(store.profile().deadlift_1rm, Some(180.0));
        assert_eq!(store.profile().one_rep_max(Lift::BenchPress), None);
    }

    #[test]
    fn test_into_profile() {
        let mut store = OnboardingStore::with_profile(Profile {
            first_name: "Kim".to_string(),
            ..Profile::default()
        });
        store.update_field(ProfileField::NotificationsEnabled(Some(true)));

        let profile = store.into_profile();

        assert_eq!(profile.first_name, "Kim");
        assert_eq!(profile.notifications_enabled, Some(true));
    }
}
