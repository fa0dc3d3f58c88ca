use std::fmt::Display;

use anyhow::{Result, ensure};

/// A carton to be stacked: the single item type of a stacking problem.
/// Dimensions are fixed at construction, the volume is derived.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Carton {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub volume: f32,
}

impl Carton {
    pub fn new(length: f32, width: f32, height: f32) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0 && height > 0.0,
            "carton dimensions must be positive: {length} x {width} x {height}"
        );
        Ok(Carton {
            length,
            width,
            height,
            volume: length * width * height,
        })
    }

    /// All 6 axis-aligned rotations of the carton, in fixed enumeration order.
    /// Duplicates (cartons with equal dimensions) are kept; each of the 6 is
    /// evaluated independently and ties resolve to the first one.
    pub fn orientations(&self) -> [Orientation; 6] {
        let (l, w, h) = (self.length, self.width, self.height);
        [
            Orientation::new(l, w, h),
            Orientation::new(w, l, h),
            Orientation::new(l, h, w),
            Orientation::new(h, l, w),
            Orientation::new(w, h, l),
            Orientation::new(h, w, l),
        ]
    }
}

/// One axis-aligned rotation of a [`Carton`]: `l` along the pallet length,
/// `w` along the pallet width, `h` vertical.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Orientation {
    pub l: f32,
    pub w: f32,
    pub h: f32,
}

impl Orientation {
    pub fn new(l: f32, w: f32, h: f32) -> Self {
        Orientation { l, w, h }
    }

    /// In-layer footprint dimensions for a 0-based layer index.
    /// Odd layers are rotated 90° to interlock with the layer below.
    pub fn layer_dims(&self, layer_idx: usize) -> (f32, f32) {
        match layer_idx % 2 == 0 {
            true => (self.l, self.w),
            false => (self.w, self.l),
        }
    }

    pub fn volume(&self) -> f32 {
        self.l * self.w * self.h
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.l, self.w, self.h)
    }
}
