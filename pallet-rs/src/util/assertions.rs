use itertools::Itertools;

use crate::entities::{Layer, Pallet, StackSolution};
use crate::support::SupportGrid;

/// Every placement of the layer lies within the pallet footprint.
pub fn layer_within_bounds(layer: &Layer, pallet: &Pallet) -> bool {
    layer.placements.iter().all(|p| {
        p.footprint.x >= 0.0
            && p.footprint.y >= 0.0
            && p.footprint.x_max() <= pallet.length
            && p.footprint.y_max() <= pallet.width
    })
}

/// No two placements of the layer overlap.
pub fn layer_without_overlap(layer: &Layer) -> bool {
    layer
        .placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.footprint.collides_with(&b.footprint))
}

/// Every placement of the layer has all four corners supported by `prev_support`.
pub fn layer_supported(layer: &Layer, prev_support: &SupportGrid) -> bool {
    layer
        .placements
        .iter()
        .all(|p| prev_support.supports(&p.footprint))
}

/// Full feasibility check of a solution: bounds, overlap and support of every
/// layer, monotonic layer indices, height limit and the utilization cap.
pub fn solution_is_feasible(solution: &StackSolution, pallet: &Pallet) -> bool {
    let deck = SupportGrid::solid(pallet);

    let layers_feasible = solution.layers.iter().enumerate().all(|(i, layer)| {
        let prev_support = match i {
            0 => &deck,
            _ => &solution.layers[i - 1].support,
        };
        layer.index == i + 1
            && !layer.is_empty()
            && layer_within_bounds(layer, pallet)
            && layer_without_overlap(layer)
            && layer_supported(layer, prev_support)
    });

    layers_feasible
        && solution.stack_height() <= pallet.max_height
        && (0.0..=1.0).contains(&solution.utilization)
}
