use crate::entities::{Orientation, Pallet, Placement, PlacementKind};
use crate::geometry::Footprint;
use crate::support::SupportGrid;

/// One horizontal tier of cartons on the pallet, at a fixed z-height.
/// Owns the occupancy grid built up by its own placements; the grid is handed
/// to the next layer as its support.
#[derive(Clone, Debug)]
pub struct Layer {
    /// 1-based tier index; the underside of layer `k` sits at `(k-1) * h`.
    pub index: usize,
    pub orientation: Orientation,
    pub placements: Vec<Placement>,
    /// Cells covered by the placements in this layer.
    pub support: SupportGrid,
}

impl Layer {
    pub fn new(index: usize, orientation: Orientation, pallet: &Pallet) -> Self {
        debug_assert!(index >= 1);
        Layer {
            index,
            orientation,
            placements: vec![],
            support: SupportGrid::empty(pallet),
        }
    }

    /// Attempts to commit a single footprint to this layer.
    /// Checks in order: pallet bounds, corner support on `prev_support`
    /// (skipped for the first layer) and overlap with already committed
    /// placements. The first failing check rejects without any mutation;
    /// acceptance records the placement and covers this layer's own grid.
    pub fn try_place(
        &mut self,
        footprint: Footprint,
        kind: PlacementKind,
        pallet: &Pallet,
        prev_support: &SupportGrid,
    ) -> bool {
        if footprint.x_max() > pallet.length || footprint.y_max() > pallet.width {
            return false;
        }
        if self.index > 1 && !prev_support.supports(&footprint) {
            return false;
        }
        if self
            .placements
            .iter()
            .any(|p| p.footprint.collides_with(&footprint))
        {
            return false;
        }

        self.support.cover(&footprint);
        self.placements.push(Placement { kind, footprint });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn n_cartons(&self) -> usize {
        self.placements.len()
    }

    /// z-coordinate of the underside of this layer.
    pub fn z(&self) -> f32 {
        (self.index - 1) as f32 * self.orientation.h
    }

    /// Total volume of the cartons in this layer: `Σ(l·w)·h` over its placements.
    pub fn volume(&self) -> f32 {
        self.placements
            .iter()
            .map(|p| p.footprint.area())
            .sum::<f32>()
            * self.orientation.h
    }
}
