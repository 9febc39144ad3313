//! Serialization boundary for the three persisted input values.

use serde::{Deserialize, Serialize};

use crate::field::{DEFAULT_LIFT, DEFAULT_SLOPE, DEFAULT_WIDTH, InputField};

/// The persisted input values, keyed by their slot names.
///
/// A key absent from the serialized form restores to its documented
/// default. The derived hub depth is never part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default = "default_lift")]
    pub lift_value: f32,
    #[serde(default = "default_slope")]
    pub slope_value: f32,
    #[serde(default = "default_width")]
    pub width_value: f32,
}

fn default_lift() -> f32 {
    DEFAULT_LIFT
}

fn default_slope() -> f32 {
    DEFAULT_SLOPE
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            lift_value: DEFAULT_LIFT,
            slope_value: DEFAULT_SLOPE,
            width_value: DEFAULT_WIDTH,
        }
    }
}

impl StateSnapshot {
    pub fn get(&self, field: InputField) -> f32 {
        match field {
            InputField::Lift => self.lift_value,
            InputField::Slope => self.slope_value,
            InputField::Width => self.width_value,
        }
    }

    pub fn set(&mut self, field: InputField, value: f32) {
        match field {
            InputField::Lift => self.lift_value = value,
            InputField::Slope => self.slope_value = value,
            InputField::Width => self.width_value = value,
        }
    }

    /// Iterate `(slot key, value)` pairs in field order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        InputField::ALL
            .into_iter()
            .map(|field| (field.key(), self.get(field)))
    }
}
