//! Hub depth across every slider position of one field.

use anyhow::{Context, Result};

use hubs_core::{compute_hub_depth, format_fixed, format_to_fraction, slider_positions, slider_value};
use hubs_model::{CalculatorConfig, InputField, StateSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub values: StateSnapshot,
    pub hub_depth: f32,
}

/// One row per slider position of `field` (both ends included), holding the
/// other two inputs at their `base` values.
pub fn sweep_rows(
    config: &CalculatorConfig,
    base: &StateSnapshot,
    field: InputField,
) -> Vec<SweepRow> {
    let spec = config.spec(field);
    (0..slider_positions(spec))
        .map(|index| {
            let mut values = *base;
            values.set(field, slider_value(spec, index));
            let hub_depth =
                compute_hub_depth(values.lift_value, values.slope_value, values.width_value);
            SweepRow { values, hub_depth }
        })
        .collect()
}

pub fn sweep_csv(
    config: &CalculatorConfig,
    base: &StateSnapshot,
    field: InputField,
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["lift", "slope", "width", "hub_depth", "hub_depth_fraction"])?;
    for row in sweep_rows(config, base, field) {
        writer.write_record([
            format_fixed(row.values.lift_value, 1),
            format_fixed(row.values.slope_value, 1),
            format_fixed(row.values.width_value, 1),
            format_fixed(row.hub_depth, 4),
            format_to_fraction(row.hub_depth),
        ])?;
    }
    let bytes = writer.into_inner().context("flush csv writer")?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}
