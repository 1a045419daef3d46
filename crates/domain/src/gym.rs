use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::{EquipmentSelection, Property, catalog};

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GymType {
    LargeGym,
    SmallGym,
    GarageGym,
}

impl Property for GymType {
    fn iter() -> Iter<'static, GymType> {
        static GYM_TYPES: [GymType; 3] = [GymType::LargeGym, GymType::SmallGym, GymType::GarageGym];
        GYM_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            GymType::LargeGym => "Large gym",
            GymType::SmallGym => "Small gym",
            GymType::GarageGym => "Garage gym",
        }
    }
}

/// Equipment not expected in a typical commercial gym.
pub const LARGE_GYM_EXCLUDED: [&str; 25] = [
    "hack_squat_machine_selectorized",
    "multi_hip_machine",
    "bent_arm_fly_machine",
    "sissy_squat_machine",
    "sled",
    "skipping_rope",
    "plate_loaded_chest_supported_t_bar",
    "plate_loaded_ab_crunch",
    "plate_loaded_chest_supported_row",
    "plate_loaded_hip_thrust_belt",
    "plate_loaded_standing_lateral_raise",
    "plate_loaded_pullover",
    "plate_loaded_standing_leg_curl",
    "vertical_leg_press",
    "belt_squat_machine",
    "plate_loaded_dip_machine",
    "mini_bands",
    "air_bike",
    "stationary_bike",
    "elliptical",
    "rowing_machine_cardio",
    "stair_stepper",
    "treadmill",
    "vertical_climber",
    "ski_erg",
];

pub const SMALL_GYM: [&str; 13] = [
    "ab_wheel",
    "stability_ball",
    "fly_machine",
    "row_machine",
    "olympic_barbell",
    "plates",
    "crossover_cable",
    "hi_lo_pull_cable",
    "dumbbells",
    "flat_bench",
    "incline_bench",
    "pull_up_bar",
    "squat_rack",
];

pub const GARAGE_GYM: [&str; 9] = [
    "ab_wheel",
    "stability_ball",
    "olympic_barbell",
    "plates",
    "dumbbells",
    "flat_bench",
    "incline_bench",
    "pull_up_bar",
    "squat_rack",
];

/// Equipment assumed to be available before the user adjusts the selection.
///
/// A large gym is described by what it lacks, smaller gyms by what they have.
#[must_use]
pub fn default_equipment(gym_type: GymType) -> EquipmentSelection {
    match gym_type {
        GymType::LargeGym => catalog::ids()
            .filter(|id| !LARGE_GYM_EXCLUDED.contains(id))
            .collect(),
        GymType::SmallGym => SMALL_GYM.into_iter().collect(),
        GymType::GarageGym => GARAGE_GYM.into_iter().collect(),
    }
}
