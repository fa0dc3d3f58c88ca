use ndarray::Array2;

use crate::entities::Pallet;
use crate::geometry::Footprint;

/// Boolean occupancy map over the pallet footprint at integer-cell
/// resolution, sized `(⌊length⌋+1) × (⌊width⌋+1)`.
/// One grid describes one finished layer: cell `(x, y)` is true if a carton
/// in that layer covers it. The next layer queries it to certify support.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportGrid {
    cells: Array2<bool>,
}

impl SupportGrid {
    /// Grid standing in for the pallet deck below the first layer: every cell supports.
    pub fn solid(pallet: &Pallet) -> Self {
        SupportGrid {
            cells: Array2::from_elem(Self::dim(pallet), true),
        }
    }

    /// Fresh grid for a layer under construction: no cell supports yet.
    pub fn empty(pallet: &Pallet) -> Self {
        SupportGrid {
            cells: Array2::from_elem(Self::dim(pallet), false),
        }
    }

    fn dim(pallet: &Pallet) -> (usize, usize) {
        (
            pallet.length.floor() as usize + 1,
            pallet.width.floor() as usize + 1,
        )
    }

    /// True if all four corner cells of `footprint` rest on covered cells.
    /// Deliberately approximate: support is sampled at the corners only, the
    /// interior of the footprint is not checked.
    pub fn supports(&self, footprint: &Footprint) -> bool {
        footprint
            .corner_cells()
            .iter()
            .all(|&(x, y)| self.cells.get((x, y)).copied().unwrap_or(false))
    }

    /// Marks the cells covered by `footprint` as occupied, clipped to the grid bounds.
    pub fn cover(&mut self, footprint: &Footprint) {
        let (n_x, n_y) = self.cells.dim();
        let x_end = usize::min(footprint.x_max() as usize, n_x);
        let y_end = usize::min(footprint.y_max() as usize, n_y);

        for x in footprint.x as usize..x_end {
            for y in footprint.y as usize..y_end {
                self.cells[(x, y)] = true;
            }
        }
    }
}
