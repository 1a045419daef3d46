use derive_more::Deref;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum WeightUnit {
    #[default]
    LB,
    KG,
}

impl WeightUnit {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            WeightUnit::LB => WeightUnit::KG,
            WeightUnit::KG => WeightUnit::LB,
        }
    }
}

pub const DEFAULT_PLATE_WEIGHTS: [f32; 10] = [1.25, 2.5, 5.0, 10.0, 15.0, 20.0, 25.0, 35.0, 45.0, 50.0];

/// 2.5 to 30 in steps of 2.5, then 35 to 125 in steps of 5.
#[must_use]
pub fn default_dumbbell_weights() -> Vec<f32> {
    (1..=12u16)
        .map(|i| f32::from(i) * 2.5)
        .chain((7..=25u16).map(|i| f32::from(i) * 5.0))
        .collect()
}

/// Available weights, kept in ascending order without duplicates.
#[derive(Deref, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f32>", into = "Vec<f32>")]
pub struct WeightSelection(Vec<f32>);

impl WeightSelection {
    #[must_use]
    pub fn new(weights: &[f32]) -> Self {
        let mut weights = weights
            .iter()
            .copied()
            .filter(|w| w.is_finite())
            .collect::<Vec<_>>();
        weights.sort_by(f32::total_cmp);
        weights.dedup();
        Self(weights)
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, weight: f32) -> bool {
        self.0.iter().any(|w| *w == weight)
    }

    /// Returns whether the weight is selected after toggling.
    #[allow(clippy::float_cmp)]
    pub fn toggle(&mut self, weight: f32) -> bool {
        if !weight.is_finite() {
            warn!("ignored invalid weight {weight}");
            return false;
        }
        if self.contains(weight) {
            self.0.retain(|w| *w != weight);
            false
        } else {
            self.0.push(weight);
            self.0.sort_by(f32::total_cmp);
            true
        }
    }

    /// Clears the selection if every available weight is selected, otherwise selects all.
    pub fn toggle_all(&mut self, available: &[f32]) {
        if self.all_selected(available) {
            self.0.clear();
        } else {
            *self = Self::new(available);
        }
    }

    #[must_use]
    pub fn all_selected(&self, available: &[f32]) -> bool {
        available.iter().all(|w| self.contains(*w))
    }
}

impl From<Vec<f32>> for WeightSelection {
    fn from(value: Vec<f32>) -> Self {
        Self::new(&value)
    }
}

impl From<WeightSelection> for Vec<f32> {
    fn from(value: WeightSelection) -> Self {
        value.0
    }
}
