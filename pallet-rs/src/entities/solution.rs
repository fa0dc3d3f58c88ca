use std::time::Instant;

use crate::entities::{Layer, Orientation, Pallet};

/// A full candidate stacking of one carton orientation on a pallet.
/// Immutable once created; the best of the 6 orientation candidates is the
/// final result of a run.
#[derive(Clone, Debug)]
pub struct StackSolution {
    pub orientation: Orientation,
    pub layers: Vec<Layer>,
    /// Number of cartons over all layers.
    pub total_cartons: usize,
    pub total_volume: f32,
    pub pallet_volume: f32,
    /// Volume-based utilization, capped at 1.0.
    pub utilization: f32,
    /// Instant the solution was created.
    pub time_stamp: Instant,
}

impl StackSolution {
    pub fn new(orientation: Orientation, layers: Vec<Layer>, pallet: &Pallet) -> Self {
        let total_cartons = layers.iter().map(|l| l.n_cartons()).sum();
        let total_volume = layers.iter().map(|l| l.volume()).sum::<f32>();
        let utilization = f32::min(total_volume / pallet.volume, 1.0);

        StackSolution {
            orientation,
            layers,
            total_cartons,
            total_volume,
            pallet_volume: pallet.volume,
            utilization,
            time_stamp: Instant::now(),
        }
    }

    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Height of the top of the stack.
    pub fn stack_height(&self) -> f32 {
        self.n_layers() as f32 * self.orientation.h
    }
}
