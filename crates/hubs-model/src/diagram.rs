//! Canvas-space drawing primitives for the road cross-section.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(820.0, 350.0)
    }
}

/// Semantic color of a primitive; renderers map it to a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Curb,
    Earth,
    Reference,
}

impl ColorTag {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            ColorTag::Curb => [0xFF, 0xFF, 0xFF, 0xFF],
            ColorTag::Earth => [0x8B, 0x45, 0x13, 0xFF],
            ColorTag::Reference => [0xFF, 0x00, 0x00, 0xFF],
        }
    }

    pub fn hex(self) -> String {
        let [r, g, b, _] = self.rgba();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    FilledPolygon,
    LineSegment,
}

/// What a primitive depicts, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveRole {
    LeftCurb,
    RightCurb,
    GradeTriangle,
    ReferenceLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramPrimitive {
    pub role: PrimitiveRole,
    pub kind: PrimitiveKind,
    pub color: ColorTag,
    pub points: Vec<Point>,
}

impl DiagramPrimitive {
    pub fn polygon(role: PrimitiveRole, color: ColorTag, points: Vec<Point>) -> Self {
        Self {
            role,
            kind: PrimitiveKind::FilledPolygon,
            color,
            points,
        }
    }

    pub fn line(role: PrimitiveRole, color: ColorTag, start: Point, end: Point) -> Self {
        Self {
            role,
            kind: PrimitiveKind::LineSegment,
            color,
            points: vec![start, end],
        }
    }
}
