//! Hub depth formula and slider discretization.

use hubs_model::FieldSpec;

/// Calibration factor applied to the lift before it is compared with the
/// crown rise.
pub const EFFECTIVE_LIFT_FACTOR: f32 = 0.083_333_67;

/// Inches per foot.
pub const INCHES_PER_FOOT: f32 = 12.0;

/// Guards the step count against truncation when `(max - min) / step` lands
/// exactly on an integer.
pub const STEP_EPSILON: f32 = 0.000_001;

/// Intermediate quantities of one hub depth evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubDepthBreakdown {
    pub half_width: f32,
    pub slope_fraction: f32,
    pub center_rise: f32,
    pub effective_lift: f32,
    pub hub_depth: f32,
}

impl HubDepthBreakdown {
    pub fn new(lift: f32, slope_percent: f32, width: f32) -> Self {
        let half_width = width / 2.0;
        let slope_fraction = slope_percent / 100.0;
        let center_rise = half_width * slope_fraction;
        let effective_lift = lift * EFFECTIVE_LIFT_FACTOR;
        let hub_depth = (effective_lift - center_rise) * INCHES_PER_FOOT;
        Self {
            half_width,
            slope_fraction,
            center_rise,
            effective_lift,
            hub_depth,
        }
    }
}

/// Hub depth in inches for a lift (inches), cross-slope (percent) and road
/// width (feet).
///
/// Total over all floats. A negative result means the crown rise exceeds the
/// lift; it is returned as-is.
pub fn compute_hub_depth(lift: f32, slope_percent: f32, width: f32) -> f32 {
    let breakdown = HubDepthBreakdown::new(lift, slope_percent, width);
    tracing::trace!(
        lift,
        slope_percent,
        width,
        half_width = breakdown.half_width,
        slope_fraction = breakdown.slope_fraction,
        center_rise = breakdown.center_rise,
        effective_lift = breakdown.effective_lift,
        hub_depth = breakdown.hub_depth,
        "hub depth computed"
    );
    breakdown.hub_depth
}

/// Number of intermediate slider stops between `min` and `max`.
///
/// Requires `step > 0` and `max > min`; other inputs give a meaningless
/// (possibly negative) count.
pub fn compute_step_count(min: f32, max: f32, step: f32) -> i32 {
    let steps = (max - min) / step + STEP_EPSILON;
    steps as i32 - 1
}

pub fn field_step_count(spec: &FieldSpec) -> i32 {
    compute_step_count(spec.min, spec.max, spec.step)
}

/// Number of slider positions, both ends included.
pub fn slider_positions(spec: &FieldSpec) -> usize {
    slider_intervals(spec) + 1
}

/// Value at slider position `index`, 0 being `min`. The intermediate stops
/// divide `[min, max]` evenly, so the last position is always `max` even
/// when `step` does not divide the range. Indices past the end pin to `max`.
pub fn slider_value(spec: &FieldSpec, index: usize) -> f32 {
    let intervals = slider_intervals(spec);
    if index >= intervals {
        return spec.max;
    }
    spec.min + (index as f32 * (spec.max - spec.min)) / intervals as f32
}

fn slider_intervals(spec: &FieldSpec) -> usize {
    usize::try_from(field_step_count(spec) + 1)
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_match_reference_value() {
        let breakdown = HubDepthBreakdown::new(9.0, 2.0, 28.0);
        assert_eq!(breakdown.half_width, 14.0);
        assert!((breakdown.slope_fraction - 0.02).abs() < 1e-7);
        assert!((breakdown.center_rise - 0.28).abs() < 1e-6);
        assert!((breakdown.effective_lift - 0.750_003_03).abs() < 1e-6);
        assert!((breakdown.hub_depth - 5.640_036_4).abs() < 1e-5);
    }

    #[test]
    fn negative_depth_is_returned_unchanged() {
        let depth = compute_hub_depth(1.0, 5.0, 80.0);
        assert!(depth < 0.0);
        assert!((depth - (0.083_333_67 - 2.0) * 12.0).abs() < 1e-4);
    }

    #[test]
    fn step_counts_for_default_ranges() {
        assert_eq!(compute_step_count(1.0, 36.0, 0.5), 69);
        assert_eq!(compute_step_count(0.5, 5.0, 0.1), 44);
        assert_eq!(compute_step_count(10.0, 80.0, 0.5), 139);
        assert_eq!(field_step_count(&FieldSpec::LIFT), 69);
    }

    #[test]
    fn slider_stops_for_default_ranges() {
        assert_eq!(slider_positions(&FieldSpec::WIDTH), 141);
        assert_eq!(slider_value(&FieldSpec::WIDTH, 0), 10.0);
        assert_eq!(slider_value(&FieldSpec::WIDTH, 36), 28.0);
        assert_eq!(slider_value(&FieldSpec::WIDTH, 140), 80.0);
        assert_eq!(slider_value(&FieldSpec::WIDTH, 1000), 80.0);
        assert_eq!(slider_value(&FieldSpec::SLOPE, 5), 1.0);
    }

    #[test]
    fn slider_stops_span_an_uneven_range() {
        // 10 / 3 leaves a remainder: two intermediate stops, three equal gaps
        let spec = FieldSpec {
            min: 0.0,
            max: 10.0,
            step: 3.0,
            default: 3.0,
            must_be_positive: true,
        };
        assert_eq!(field_step_count(&spec), 2);
        assert_eq!(slider_positions(&spec), 4);
        assert!((slider_value(&spec, 1) - 10.0 / 3.0).abs() < 1e-6);
        assert!((slider_value(&spec, 2) - 20.0 / 3.0).abs() < 1e-5);
        assert_eq!(slider_value(&spec, 3), 10.0);
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        assert!(compute_hub_depth(f32::NAN, 2.0, 28.0).is_nan());
        assert_eq!(compute_hub_depth(f32::INFINITY, 2.0, 28.0), f32::INFINITY);
    }
}
