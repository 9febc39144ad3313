//! Property tests for the hub depth formula, diagram symmetry and the
//! validation gate.

use proptest::prelude::*;

use hubs_core::{
    CommitDecision, DiagramInputs, HubsSession, compute_diagram, compute_hub_depth,
    format_to_fraction,
};
use hubs_model::{CalculatorConfig, CanvasSize, InputField, PrimitiveRole};

proptest! {
    #[test]
    fn hub_depth_is_deterministic(
        lift in -1.0e6f32..1.0e6,
        slope in -1.0e3f32..1.0e3,
        width in -1.0e4f32..1.0e4,
    ) {
        let first = compute_hub_depth(lift, slope, width);
        let second = compute_hub_depth(lift, slope, width);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn hub_depth_increases_with_lift(
        low in 2u32..=72,
        delta in 1u32..=20,
        slope_step in 5u32..=50,
        width_step in 20u32..=160,
    ) {
        let (slope, width) = (slope_step as f32 / 10.0, width_step as f32 / 2.0);
        let lift_low = low as f32 / 2.0;
        let lift_high = (low + delta) as f32 / 2.0;
        prop_assert!(
            compute_hub_depth(lift_high, slope, width) > compute_hub_depth(lift_low, slope, width)
        );
    }

    #[test]
    fn hub_depth_decreases_with_slope(
        lift_step in 2u32..=72,
        low in 5u32..=49,
        delta in 1u32..=10,
        width_step in 20u32..=160,
    ) {
        let (lift, width) = (lift_step as f32 / 2.0, width_step as f32 / 2.0);
        let slope_low = low as f32 / 10.0;
        let slope_high = (low + delta) as f32 / 10.0;
        prop_assert!(
            compute_hub_depth(lift, slope_high, width) < compute_hub_depth(lift, slope_low, width)
        );
    }

    #[test]
    fn hub_depth_decreases_with_width(
        lift_step in 2u32..=72,
        slope_step in 5u32..=50,
        low in 20u32..=159,
        delta in 1u32..=20,
    ) {
        let (lift, slope) = (lift_step as f32 / 2.0, slope_step as f32 / 10.0);
        let width_low = low as f32 / 2.0;
        let width_high = (low + delta) as f32 / 2.0;
        prop_assert!(
            compute_hub_depth(lift, slope, width_high) < compute_hub_depth(lift, slope, width_low)
        );
    }

    #[test]
    fn fraction_formatting_never_panics(value in any::<f32>()) {
        let text = format_to_fraction(value);
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn large_whole_values_print_exactly(value in any::<f32>()) {
        // every finite f32 at or above 2^23 is a whole number
        prop_assume!(value.is_finite() && value.abs() >= 8_388_608.0);
        prop_assert_eq!(format_to_fraction(value).parse::<f32>(), Ok(value));
    }

    #[test]
    fn diagram_is_symmetric_about_center(
        lift in 1.0f32..=36.0,
        width in 10.0f32..=80.0,
        slope in 0.5f32..=5.0,
        canvas_width in 100.0f32..2000.0,
        canvas_height in 100.0f32..2000.0,
    ) {
        let config = CalculatorConfig::default();
        let depth = compute_hub_depth(lift, slope, width);
        let inputs = DiagramInputs::from_config(&config, lift, width, depth);
        let primitives = compute_diagram(&inputs, CanvasSize::new(canvas_width, canvas_height));
        let center = canvas_width / 2.0;
        let tolerance = canvas_width * 1e-5;

        prop_assert_eq!(primitives.len(), 4);
        prop_assert_eq!(primitives[0].role, PrimitiveRole::LeftCurb);
        prop_assert_eq!(primitives[1].role, PrimitiveRole::RightCurb);
        prop_assert_eq!(primitives[2].role, PrimitiveRole::GradeTriangle);
        prop_assert_eq!(primitives[3].role, PrimitiveRole::ReferenceLine);

        for (left, right) in primitives[0].points.iter().zip(&primitives[1].points) {
            prop_assert!(((center - left.x) - (right.x - center)).abs() <= tolerance);
            prop_assert_eq!(left.y, right.y);
        }
        let triangle = &primitives[2].points;
        prop_assert!(((center - triangle[0].x) - (triangle[2].x - center)).abs() <= tolerance);
        prop_assert_eq!(triangle[1].x, center);
        let line = &primitives[3].points;
        prop_assert!(((center - line[0].x) - (line[1].x - center)).abs() <= tolerance);
    }

    #[test]
    fn gate_never_commits_text_without_a_valid_positive_number(
        keystrokes in proptest::collection::vec("[-a-z ,]{0,4}", 1..12),
    ) {
        let mut session = HubsSession::default();
        session.on_field_focus_gained(InputField::Lift);
        for text in &keystrokes {
            let decision = session.on_text_changed(InputField::Lift, text);
            prop_assert!(matches!(decision, CommitDecision::Rejected(_)), "{text:?}");
            prop_assert_eq!(session.value(InputField::Lift), 9.0);
        }
    }
}
