//! SVG rendering of diagram primitives.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use hubs_model::{CanvasSize, DiagramPrimitive, PrimitiveKind};

/// SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Canvas background, a translucent dark gray.
const BACKGROUND_FILL: &str = "#444444";
const BACKGROUND_OPACITY: &str = "0.3";

/// Options for SVG output.
#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    /// Text drawn in the top-left corner, e.g. the formatted hub depth.
    pub caption: Option<String>,
    /// Draw the translucent canvas background.
    pub background: bool,
}

/// Render primitives as a standalone SVG document, preserving their order.
pub fn render_svg(
    primitives: &[DiagramPrimitive],
    canvas: CanvasSize,
    options: &SvgOptions,
) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let width = coord(canvas.width);
    let height = coord(canvas.height);
    let view_box = format!("0 0 {width} {height}");
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("version", "1.1"));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    xml.write_event(Event::Start(root))?;

    if options.background {
        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("width", width.as_str()));
        rect.push_attribute(("height", height.as_str()));
        rect.push_attribute(("fill", BACKGROUND_FILL));
        rect.push_attribute(("fill-opacity", BACKGROUND_OPACITY));
        xml.write_event(Event::Empty(rect))?;
    }

    for primitive in primitives {
        write_primitive(&mut xml, primitive)?;
    }

    if let Some(caption) = &options.caption {
        let mut text = BytesStart::new("text");
        text.push_attribute(("x", "8"));
        text.push_attribute(("y", "20"));
        text.push_attribute(("font-family", "sans-serif"));
        text.push_attribute(("font-size", "16"));
        xml.write_event(Event::Start(text))?;
        xml.write_event(Event::Text(BytesText::new(caption)))?;
        xml.write_event(Event::End(BytesEnd::new("text")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("svg")))?;
    String::from_utf8(xml.into_inner()).context("svg output is not utf-8")
}

fn write_primitive(xml: &mut Writer<Vec<u8>>, primitive: &DiagramPrimitive) -> Result<()> {
    let color = primitive.color.hex();
    let role = format!("{:?}", primitive.role);
    match primitive.kind {
        PrimitiveKind::FilledPolygon => {
            let points = primitive
                .points
                .iter()
                .map(|p| format!("{},{}", coord(p.x), coord(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            let mut polygon = BytesStart::new("polygon");
            polygon.push_attribute(("class", role.as_str()));
            polygon.push_attribute(("points", points.as_str()));
            polygon.push_attribute(("fill", color.as_str()));
            xml.write_event(Event::Empty(polygon))?;
        }
        PrimitiveKind::LineSegment => {
            let [start, end] = primitive.points.as_slice() else {
                anyhow::bail!(
                    "line segment {role} needs exactly two points, got {}",
                    primitive.points.len()
                );
            };
            let (x1, y1, x2, y2) = (coord(start.x), coord(start.y), coord(end.x), coord(end.y));
            let mut line = BytesStart::new("line");
            line.push_attribute(("class", role.as_str()));
            line.push_attribute(("x1", x1.as_str()));
            line.push_attribute(("y1", y1.as_str()));
            line.push_attribute(("x2", x2.as_str()));
            line.push_attribute(("y2", y2.as_str()));
            line.push_attribute(("stroke", color.as_str()));
            line.push_attribute(("stroke-width", "2"));
            xml.write_event(Event::Empty(line))?;
        }
    }
    Ok(())
}

/// Canvas coordinate with two decimals, trailing zeros dropped.
fn coord(value: f32) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_trims_trailing_zeros() {
        assert_eq!(coord(270.0), "270");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(1.0 / 3.0), "0.33");
        assert_eq!(coord(-0.001), "0");
    }

    #[test]
    fn line_with_wrong_point_count_is_an_error() {
        let primitive = DiagramPrimitive {
            role: hubs_model::PrimitiveRole::ReferenceLine,
            kind: PrimitiveKind::LineSegment,
            color: hubs_model::ColorTag::Reference,
            points: vec![],
        };
        let result = render_svg(&[primitive], CanvasSize::default(), &SvgOptions::default());
        assert!(result.is_err());
    }
}
