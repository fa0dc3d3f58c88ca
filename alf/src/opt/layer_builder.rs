use itertools::Itertools;
use pallet_rs::entities::{Layer, Orientation, Pallet, PlacementKind};
use pallet_rs::geometry::Footprint;
use pallet_rs::support::SupportGrid;

/// Builds a single layer for the given orientation and 0-based layer index.
///
/// Three passes, all routed through [`Layer::try_place`]:
/// 1. primary grid of the layer footprint (rotated 90° on odd layers),
/// 2. fill of the trailing strip along the x-axis: a square `(layer_w, layer_w)`
///    pass when the strip is wide enough, then both rotated footprints,
/// 3. the symmetric fill along the y-axis.
///
/// The passes are not mutually exclusive; later attempts on an occupied cell
/// are rejected by the overlap check.
pub fn build_layer(
    orientation: Orientation,
    layer_idx: usize,
    pallet: &Pallet,
    prev_support: &SupportGrid,
) -> Layer {
    let (layer_l, layer_w) = orientation.layer_dims(layer_idx);
    let first_layer = layer_idx == 0;
    let mut layer = Layer::new(layer_idx + 1, orientation, pallet);

    let x_num = (pallet.length / layer_l).floor() as usize;
    let y_num = (pallet.width / layer_w).floor() as usize;

    // primary grid
    for (x, y) in (0..x_num).cartesian_product(0..y_num) {
        let footprint = Footprint::new(x as f32 * layer_l, y as f32 * layer_w, layer_l, layer_w);
        layer.try_place(footprint, PlacementKind::Primary, pallet, prev_support);
    }

    let x_remain = pallet.length - x_num as f32 * layer_l;
    let y_remain = pallet.width - y_num as f32 * layer_w;

    // trailing strip along the x-axis
    if x_remain > 0.0 && y_num > 0 {
        let x_start = x_num as f32 * layer_l;
        if x_remain >= layer_w {
            for y in 0..y_num {
                let footprint = Footprint::new(x_start, y as f32 * layer_w, layer_w, layer_w);
                layer.try_place(footprint, PlacementKind::StripX, pallet, prev_support);
            }
        }
        for (rot_l, rot_w) in [(orientation.w, orientation.l), (orientation.l, orientation.w)] {
            // above the first layer the rotated footprint must also fit the row
            if rot_l <= x_remain && (rot_w <= layer_w || first_layer) {
                for y in 0..y_num {
                    let footprint = Footprint::new(x_start, y as f32 * layer_w, rot_l, rot_w);
                    layer.try_place(footprint, PlacementKind::StripXRot, pallet, prev_support);
                }
            }
        }
    }

    // trailing strip along the y-axis
    if y_remain > 0.0 && x_num > 0 {
        let y_start = y_num as f32 * layer_w;
        if y_remain >= layer_l {
            for x in 0..x_num {
                let footprint = Footprint::new(x as f32 * layer_l, y_start, layer_l, layer_l);
                layer.try_place(footprint, PlacementKind::StripY, pallet, prev_support);
            }
        }
        for (rot_l, rot_w) in [(orientation.w, orientation.l), (orientation.l, orientation.w)] {
            if rot_w <= y_remain && (rot_l <= layer_l || first_layer) {
                for x in 0..x_num {
                    let footprint = Footprint::new(x as f32 * layer_l, y_start, rot_l, rot_w);
                    layer.try_place(footprint, PlacementKind::StripYRot, pallet, prev_support);
                }
            }
        }
    }

    layer
}
