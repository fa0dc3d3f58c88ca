use std::time::Instant;

use log::{debug, info};
use pallet_rs::entities::{Carton, Layer, Orientation, Pallet, StackSolution};
use pallet_rs::support::SupportGrid;
use pallet_rs::util::assertions;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::AlfConfig;
use crate::opt::LAYER_LIMIT;
use crate::opt::layer_builder::build_layer;

/// Alternating-Layer Fill (ALF) optimizer: stacks layers of a single carton
/// type on a pallet, rotating the in-layer footprint 90° every layer, and
/// keeps the best of the carton's 6 orientations.
pub struct AltStackOptimizer {
    pub carton: Carton,
    pub pallet: Pallet,
    pub config: AlfConfig,
}

impl AltStackOptimizer {
    pub fn new(carton: Carton, pallet: Pallet, config: AlfConfig) -> Self {
        Self {
            carton,
            pallet,
            config,
        }
    }

    /// Evaluates all 6 orientations and returns the candidate with the most
    /// cartons, or `None` if no orientation fits at all.
    pub fn solve(&self) -> Option<StackSolution> {
        let start = Instant::now();
        let orientations = self.carton.orientations();

        let candidates: Vec<Option<StackSolution>> = match self.config.parallel_orientations {
            true => orientations
                .into_par_iter()
                .map(|o| optimize_orientation(o, &self.pallet))
                .collect(),
            false => orientations
                .into_iter()
                .map(|o| optimize_orientation(o, &self.pallet))
                .collect(),
        };

        // candidates are reduced in enumeration order with a strict comparison,
        // so ties resolve to the first orientation regardless of parallelism
        let mut best: Option<StackSolution> = None;
        for candidate in candidates.into_iter().flatten() {
            match &best {
                Some(b) if candidate.total_cartons <= b.total_cartons => {}
                _ => best = Some(candidate),
            }
        }

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        match &best {
            Some(sol) => info!(
                "[ALF] best orientation {} stacks {} cartons in {} layers ({:.1}% utilization) [{:.3}ms]",
                sol.orientation,
                sol.total_cartons.separate_with_commas(),
                sol.n_layers(),
                sol.utilization * 100.0,
                elapsed_ms,
            ),
            None => info!("[ALF] no orientation yields a feasible layout [{elapsed_ms:.3}ms]"),
        }

        best
    }
}

/// Stacks layers for a single orientation until the height limit is reached
/// or a layer comes up empty. Returns `None` if nothing could be placed.
///
/// Each call owns its grids and layer records; evaluations of different
/// orientations are fully independent.
pub fn optimize_orientation(orientation: Orientation, pallet: &Pallet) -> Option<StackSolution> {
    if orientation.h > pallet.max_height {
        debug!(
            "[ALF] orientation {} exceeds the height limit of {}",
            orientation, pallet.max_height
        );
        return None;
    }

    let deck = SupportGrid::solid(pallet);
    let mut layers: Vec<Layer> = vec![];
    let mut current_z = 0.0;

    while current_z + orientation.h <= pallet.max_height {
        let prev_support = layers.last().map_or(&deck, |l| &l.support);
        let layer = build_layer(orientation, layers.len(), pallet, prev_support);

        if layer.is_empty() {
            // nothing rests on the previous layer, stop stacking
            break;
        }

        debug!(
            "[ALF] orientation {}: layer {} holds {} cartons",
            orientation,
            layer.index,
            layer.n_cartons()
        );
        current_z += orientation.h;
        layers.push(layer);

        #[allow(clippy::absurd_extreme_comparisons)]
        if layers.len() >= LAYER_LIMIT {
            break;
        }
    }

    if layers.is_empty() {
        return None;
    }

    let solution = StackSolution::new(orientation, layers, pallet);
    debug_assert!(assertions::solution_is_feasible(&solution, pallet));
    Some(solution)
}
