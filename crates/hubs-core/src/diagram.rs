//! Mapping of domain values onto the cross-section diagram.
//!
//! The horizontal scale fits the widest configurable road plus a one-foot
//! curb on each side; the vertical scale fits the lift range. The road
//! surface sits `lift` above the canvas floor and the grade triangle apex
//! sits `hub_depth` below the road surface. Nothing is clamped, so the apex
//! may leave the canvas for physically invalid inputs.

use std::ops::RangeInclusive;

use hubs_model::{CalculatorConfig, CanvasSize, ColorTag, DiagramPrimitive, Point, PrimitiveRole};

/// Curb width in feet.
pub const CURB_WIDTH_FEET: f32 = 1.0;

/// Everything the mapper needs besides the canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramInputs {
    pub lift: f32,
    pub width: f32,
    pub hub_depth: f32,
    pub width_range: RangeInclusive<f32>,
    pub lift_range: RangeInclusive<f32>,
}

impl DiagramInputs {
    pub fn from_config(config: &CalculatorConfig, lift: f32, width: f32, hub_depth: f32) -> Self {
        Self {
            lift,
            width,
            hub_depth,
            width_range: config.width.min..=config.width.max,
            lift_range: config.lift.min..=config.lift.max,
        }
    }
}

/// Primitives in draw order: left curb, right curb, grade triangle,
/// reference line.
pub fn compute_diagram(inputs: &DiagramInputs, canvas: CanvasSize) -> Vec<DiagramPrimitive> {
    let total_display_width_feet = inputs.width_range.end() + 2.0 * CURB_WIDTH_FEET;
    let x_pixels_per_foot = canvas.width / total_display_width_feet;
    let y_pixels_per_inch = canvas.height / (inputs.lift_range.end() - inputs.lift_range.start());
    let x_center = canvas.width / 2.0;

    let half_road_width = (inputs.width / 2.0) * x_pixels_per_foot;
    let curb_width = CURB_WIDTH_FEET * x_pixels_per_foot;

    let left_inside = x_center - half_road_width;
    let right_inside = x_center + half_road_width;
    let left_outside = left_inside - curb_width;
    let right_outside = right_inside + curb_width;

    let y_bottom = canvas.height;
    let y_top = y_bottom - inputs.lift * y_pixels_per_inch;
    let y_center = y_top + inputs.hub_depth * y_pixels_per_inch;

    vec![
        curb(PrimitiveRole::LeftCurb, left_inside, left_outside, y_top, y_bottom),
        curb(PrimitiveRole::RightCurb, right_inside, right_outside, y_top, y_bottom),
        DiagramPrimitive::polygon(
            PrimitiveRole::GradeTriangle,
            ColorTag::Earth,
            vec![
                Point::new(left_inside, y_bottom),
                Point::new(x_center, y_center),
                Point::new(right_inside, y_bottom),
            ],
        ),
        DiagramPrimitive::line(
            PrimitiveRole::ReferenceLine,
            ColorTag::Reference,
            Point::new(left_inside, y_top),
            Point::new(right_inside, y_top),
        ),
    ]
}

fn curb(role: PrimitiveRole, inside: f32, outside: f32, top: f32, bottom: f32) -> DiagramPrimitive {
    DiagramPrimitive::polygon(
        role,
        ColorTag::Curb,
        vec![
            Point::new(inside, top),
            Point::new(outside, top),
            Point::new(outside, bottom),
            Point::new(inside, bottom),
        ],
    )
}
