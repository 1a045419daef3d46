use std::{collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: EquipmentCategory,
}

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
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EquipmentCategory {
    Machine,
    PlateLoaded,
    BenchRack,
    Cable,
    FreeWeight,
    Functional,
    BandAccessory,
    Cardio,
}

impl Property for EquipmentCategory {
    fn iter() -> Iter<'static, EquipmentCategory> {
        static CATEGORIES: [EquipmentCategory; 8] = [
            EquipmentCategory::Machine,
            EquipmentCategory::PlateLoaded,
            EquipmentCategory::BenchRack,
            EquipmentCategory::Cable,
            EquipmentCategory::FreeWeight,
            EquipmentCategory::Functional,
            EquipmentCategory::BandAccessory,
            EquipmentCategory::Cardio,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentCategory::Machine => "Weight Machines",
            EquipmentCategory::PlateLoaded => "Plated Machines",
            EquipmentCategory::BenchRack => "Benches and Racks",
            EquipmentCategory::Cable => "Cable Machines",
            EquipmentCategory::FreeWeight => "Free Weights",
            EquipmentCategory::Functional => "Functional Training",
            EquipmentCategory::BandAccessory => "Bands & Accessories",
            EquipmentCategory::Cardio => "Cardio Equipment",
        }
    }
}

/// Equipment ids the user has confirmed access to.
///
/// Iteration is sorted by id, so the order never depends on the sequence of
/// toggles that produced the selection.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentSelection(BTreeSet<String>);

impl EquipmentSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn insert(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Returns whether the id is selected after toggling.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn replace<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.0 = ids.into_iter().map(str::to_string).collect();
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.0.extend(ids.into_iter().map(str::to_string));
    }

    pub fn deselect_all(&mut self) {
        self.0.clear();
    }
}

impl<'a> FromIterator<&'a str> for EquipmentSelection {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
