use pallet_rs::entities::{Layer, Pallet};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::io::svg_util::SvgDrawOptions;

/// Renders a single layer as a 2D top view: the pallet outline plus one
/// rectangle per placement, fill color keyed by the placement kind.
pub fn layer_to_svg(layer: &Layer, pallet: &Pallet, options: SvgDrawOptions) -> Document {
    let theme = options.theme.theme();
    let stroke_width =
        f32::min(pallet.length, pallet.width) * 0.001 * theme.stroke_width_multiplier;

    let pallet_group = {
        let title = Title::new(format!(
            "pallet, {} x {}, layer {} at z = {:.3}",
            pallet.length,
            pallet.width,
            layer.index,
            layer.z()
        ));
        Group::new()
            .set("id", "pallet")
            .add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", pallet.length)
                    .set("height", pallet.width)
                    .set("fill", theme.pallet_fill)
                    .set("stroke", "black")
                    .set("stroke-width", 2.0 * stroke_width),
            )
            .add(title)
    };

    let placements_group = {
        let mut group = Group::new().set("id", format!("layer_{}", layer.index));
        for placement in &layer.placements {
            let fp = &placement.footprint;
            let mut rect_group = Group::new()
                .add(
                    Rectangle::new()
                        .set("x", fp.x)
                        .set("y", fp.y)
                        .set("width", fp.l)
                        .set("height", fp.w)
                        .set("fill", theme.placement_fill(placement.kind))
                        .set("fill-opacity", "0.8")
                        .set("stroke", "black")
                        .set("stroke-width", stroke_width),
                )
                .add(Title::new(format!(
                    "{}, x: {:.3}, y: {:.3}, l: {:.3}, w: {:.3}",
                    placement.kind.as_str(),
                    fp.x,
                    fp.y,
                    fp.l,
                    fp.w
                )));

            if options.draw_labels {
                rect_group = rect_group.add(
                    Text::new(format!("{}x{}", fp.l, fp.w))
                        .set("x", fp.x + fp.l / 2.0)
                        .set("y", fp.y + fp.w / 2.0)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("font-size", f32::min(fp.l, fp.w) * 0.25),
                );
            }
            group = group.add(rect_group);
        }
        group
    };

    Document::new()
        .set(
            "viewBox",
            (
                -0.05 * pallet.length,
                -0.05 * pallet.width,
                1.1 * pallet.length,
                1.1 * pallet.width,
            ),
        )
        .add(pallet_group)
        .add(placements_group)
}
