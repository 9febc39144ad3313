//! Input fields and their slider/validation configuration.
//!
//! Each [`InputField`] owns a [`FieldSpec`] describing the range a slider
//! may move through, the slider step, the value used when no saved state
//! exists, and whether typed entries must be non-negative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HubsError, Result};
use crate::snapshot::StateSnapshot;

pub const DEFAULT_LIFT: f32 = 9.0;
pub const DEFAULT_SLOPE: f32 = 2.0;
pub const DEFAULT_WIDTH: f32 = 28.0;

/// One of the three user-adjustable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    /// Vertical rise, in inches.
    Lift,
    /// Cross-slope, as a percentage grade.
    Slope,
    /// Road width, in feet.
    Width,
}

impl InputField {
    pub const ALL: [InputField; 3] = [InputField::Lift, InputField::Slope, InputField::Width];

    /// Stable identifier of the persisted slot holding this field's value.
    pub fn key(self) -> &'static str {
        match self {
            InputField::Lift => "lift_value",
            InputField::Slope => "slope_value",
            InputField::Width => "width_value",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Lift => "Lift",
            InputField::Slope => "Slope",
            InputField::Width => "Width",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputField::Lift => "Inches",
            InputField::Slope => "Percent",
            InputField::Width => "Feet",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputField::Lift => "lift",
            InputField::Slope => "slope",
            InputField::Width => "width",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = HubsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        InputField::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(trimmed)
                    || field.key().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| HubsError::UnknownField(trimmed.to_string()))
    }
}

/// Range, step and default for a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
    /// Reject typed values below zero.
    #[serde(default = "default_true")]
    pub must_be_positive: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    pub const LIFT: FieldSpec = FieldSpec {
        min: 1.0,
        max: 36.0,
        step: 0.5,
        default: DEFAULT_LIFT,
        must_be_positive: true,
    };

    pub const SLOPE: FieldSpec = FieldSpec {
        min: 0.5,
        max: 5.0,
        step: 0.1,
        default: DEFAULT_SLOPE,
        must_be_positive: true,
    };

    pub const WIDTH: FieldSpec = FieldSpec {
        min: 10.0,
        max: 80.0,
        step: 0.5,
        default: DEFAULT_WIDTH,
        must_be_positive: true,
    };

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pin a value into `[min, max]`. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    pub fn validate(&self, field: InputField) -> Result<()> {
        let ordered = self.min < self.max;
        if !ordered {
            return Err(HubsError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        let stepped = self.step > 0.0;
        if !stepped {
            return Err(HubsError::InvalidStep {
                field,
                step: self.step,
            });
        }
        if !self.contains(self.default) {
            return Err(HubsError::DefaultOutOfRange {
                field,
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// The configuration surface: one [`FieldSpec`] per input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub lift: FieldSpec,
    pub slope: FieldSpec,
    pub width: FieldSpec,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            lift: FieldSpec::LIFT,
            slope: FieldSpec::SLOPE,
            width: FieldSpec::WIDTH,
        }
    }
}

impl CalculatorConfig {
    pub fn spec(&self, field: InputField) -> &FieldSpec {
        match field {
            InputField::Lift => &self.lift,
            InputField::Slope => &self.slope,
            InputField::Width => &self.width,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            self.spec(field).validate(field)?;
        }
        Ok(())
    }

    /// Input values a fresh session starts from, and the fallback for any
    /// slot missing from persisted state.
    pub fn defaults(&self) -> StateSnapshot {
        StateSnapshot {
            lift_value: self.lift.default,
            slope_value: self.slope.default,
            width_value: self.width.default,
        }
    }
}
