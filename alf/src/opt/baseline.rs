use log::{debug, info};
use pallet_rs::entities::{
    Carton, Layer, Orientation, Pallet, Placement, PlacementKind, StackSolution,
};
use pallet_rs::geometry::Footprint;
use thousands::Separable;

/// Straight-grid reference optimizer, used only to measure what the strip
/// fills and support-aware search add.
///
/// Structurally mirrors [`AltStackOptimizer`](crate::opt::alt_stack::AltStackOptimizer)
/// but its layers are a pure alternating grid: no support check, no overlap
/// check, no strip fills.
pub struct BaselineOptimizer {
    pub carton: Carton,
    pub pallet: Pallet,
}

impl BaselineOptimizer {
    pub fn new(carton: Carton, pallet: Pallet) -> Self {
        Self { carton, pallet }
    }

    pub fn solve(&self) -> Option<StackSolution> {
        let mut best: Option<StackSolution> = None;
        for orientation in self.carton.orientations() {
            let candidate = baseline_orientation(orientation, &self.pallet);
            if let Some(candidate) = candidate {
                match &best {
                    Some(b) if candidate.total_cartons <= b.total_cartons => {}
                    _ => best = Some(candidate),
                }
            }
        }

        match &best {
            Some(sol) => info!(
                "[BASE] straight grid stacks {} cartons in {} layers ({:.1}% utilization)",
                sol.total_cartons.separate_with_commas(),
                sol.n_layers(),
                sol.utilization * 100.0,
            ),
            None => info!("[BASE] no orientation yields a feasible layout"),
        }

        best
    }
}

fn baseline_orientation(orientation: Orientation, pallet: &Pallet) -> Option<StackSolution> {
    if orientation.h > pallet.max_height {
        debug!(
            "[BASE] orientation {} exceeds the height limit of {}",
            orientation, pallet.max_height
        );
        return None;
    }

    let mut layers: Vec<Layer> = vec![];
    let mut current_z = 0.0;

    while current_z + orientation.h <= pallet.max_height {
        let layer = baseline_layer(orientation, layers.len(), pallet);
        if layer.is_empty() {
            break;
        }
        current_z += orientation.h;
        layers.push(layer);
    }

    match layers.is_empty() {
        true => None,
        false => Some(StackSolution::new(orientation, layers, pallet)),
    }
}

/// Pure alternating grid: `x_num * y_num` footprints appended without any validation.
fn baseline_layer(orientation: Orientation, layer_idx: usize, pallet: &Pallet) -> Layer {
    let (layer_l, layer_w) = orientation.layer_dims(layer_idx);
    let mut layer = Layer::new(layer_idx + 1, orientation, pallet);

    let x_num = (pallet.length / layer_l).floor() as usize;
    let y_num = (pallet.width / layer_w).floor() as usize;

    for x in 0..x_num {
        for y in 0..y_num {
            let footprint =
                Footprint::new(x as f32 * layer_l, y as f32 * layer_w, layer_l, layer_w);
            layer.placements.push(Placement {
                kind: PlacementKind::Primary,
                footprint,
            });
        }
    }

    layer
}
