use crate::{EquipmentCategory, EquipmentItem};

#[must_use]
pub fn equipment(id: &str) -> Option<&'static EquipmentItem> {
    EQUIPMENT.iter().find(|e| e.id == id)
}

#[must_use]
pub fn ids() -> impl Iterator<Item = &'static str> {
    EQUIPMENT.iter().map(|e| e.id)
}

pub static EQUIPMENT: [EquipmentItem; 79] = [
    EquipmentItem {
        id: "ab_crunch_machine",
        name: "Ab Crunch Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "assisted_weight_machine",
        name: "Assisted Weight Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "back_extension_machine",
        name: "Back Extension Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "bent_arm_fly_machine",
        name: "Bent Arm Fly Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "bicep_curl_machine",
        name: "Bicep Curl Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "chest_press_machine",
        name: "Chest Press Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "fly_machine",
        name: "Fly Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "glute_kickback_machine",
        name: "Glute Kickback Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "hack_squat_machine_selectorized",
        name: "Hack Squat Machine (Selectorized)",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "hip_abduction_machine",
        name: "Hip Abduction Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "hip_adduction_machine",
        name: "Hip Adduction Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "lat_pulldown_machine",
        name: "Lat Pulldown Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "leg_extension_machine",
        name: "Leg Extension Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "leg_press_machine",
        name: "Leg Press Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "lying_leg_curl_machine",
        name: "Lying Leg Curl Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "multi_hip_machine",
        name: "Multi Hip Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "rear_delt_machine",
        name: "Rear Delt Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "row_machine",
        name: "Row Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "seated_calf_raise_machine",
        name: "Seated Calf Raise Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "seated_leg_curl_machine",
        name: "Seated Leg Curl Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "shoulder_press_machine",
        name: "Shoulder Press Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "sissy_squat_machine",
        name: "Sissy Squat Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "standing_calf_raise_machine",
        name: "Standing Calf Raise Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "tricep_extension_machine",
        name: "Tricep Extension Machine",
        category: EquipmentCategory::Machine,
    },
    EquipmentItem {
        id: "belt_squat_machine",
        name: "Belt Squat Machine",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "landmine",
        name: "Landmine",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_ab_crunch",
        name: "Plate Loaded Ab Crunch",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_chest_press",
        name: "Plate Loaded Chest Press",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_chest_supported_row",
        name: "Plate Loaded Chest Supported Row",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_chest_supported_t_bar",
        name: "Plate Loaded Chest Supported T-Bar",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_dip_machine",
        name: "Plate Loaded Dip Machine",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_hack_squat",
        name: "Plate Loaded Hack Squat",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_hip_thrust_belt",
        name: "Plate Loaded Hip Thrust Belt",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_iso_lateral_row",
        name: "Plate Loaded Iso-Lateral Row",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_leg_press",
        name: "Plate Loaded Leg Press",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_pullover",
        name: "Plate Loaded Pullover",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_shoulder_machine",
        name: "Plate Loaded Shoulder Machine",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_standing_lateral_raise",
        name: "Plate Loaded Standing Lateral Raise",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "plate_loaded_standing_leg_curl",
        name: "Plate Loaded Standing Leg Curl",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "vertical_leg_press",
        name: "Vertical Leg Press",
        category: EquipmentCategory::PlateLoaded,
    },
    EquipmentItem {
        id: "decline_bench",
        name: "Decline Bench",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "dip_station",
        name: "Dip Station",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "flat_bench",
        name: "Flat Bench",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "incline_bench",
        name: "Incline Bench",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "preacher_curl_bench",
        name: "Preacher Curl Bench",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "pull_up_bar",
        name: "Pull-Up Bar",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "roman_chair",
        name: "Roman Chair",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "smith_machine",
        name: "Smith Machine",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "squat_rack",
        name: "Squat Rack",
        category: EquipmentCategory::BenchRack,
    },
    EquipmentItem {
        id: "crossover_cable",
        name: "Crossover Cable",
        category: EquipmentCategory::Cable,
    },
    EquipmentItem {
        id: "hi_lo_pull_cable",
        name: "Hi-Lo Pull Cable",
        category: EquipmentCategory::Cable,
    },
    EquipmentItem {
        id: "seated_cable_row",
        name: "Seated Cable Row",
        category: EquipmentCategory::Cable,
    },
    EquipmentItem {
        id: "single_cable_column",
        name: "Single Cable Column",
        category: EquipmentCategory::Cable,
    },
    EquipmentItem {
        id: "dumbbells",
        name: "Dumbbells",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "ez_curl_bar",
        name: "EZ Curl Bar",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "kettlebells",
        name: "Kettlebells",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "olympic_barbell",
        name: "Olympic Barbell",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "plates",
        name: "Plates",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "trap_bar",
        name: "Trap Bar",
        category: EquipmentCategory::FreeWeight,
    },
    EquipmentItem {
        id: "battle_ropes",
        name: "Battle Ropes",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "gymnastic_rings",
        name: "Gymnastic Rings",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "medicine_ball",
        name: "Medicine Ball",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "plyo_box",
        name: "Plyo Box",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "skipping_rope",
        name: "Skipping Rope",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "sled",
        name: "Sled",
        category: EquipmentCategory::Functional,
    },
    EquipmentItem {
        id: "ab_wheel",
        name: "Ab Wheel",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "foam_roller",
        name: "Foam Roller",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "mini_bands",
        name: "Mini Bands",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "resistance_bands",
        name: "Resistance Bands",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "stability_ball",
        name: "Stability Ball",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "suspension_trainer",
        name: "Suspension Trainer",
        category: EquipmentCategory::BandAccessory,
    },
    EquipmentItem {
        id: "air_bike",
        name: "Air Bike",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "elliptical",
        name: "Elliptical",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "rowing_machine_cardio",
        name: "Rowing Machine",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "ski_erg",
        name: "Ski Erg",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "stair_stepper",
        name: "Stair Stepper",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "stationary_bike",
        name: "Stationary Bike",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "treadmill",
        name: "Treadmill",
        category: EquipmentCategory::Cardio,
    },
    EquipmentItem {
        id: "vertical_climber",
        name: "Vertical Climber",
        category: EquipmentCategory::Cardio,
    },
];
