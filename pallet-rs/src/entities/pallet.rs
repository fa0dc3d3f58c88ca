use anyhow::{Result, ensure};

/// The loading base: a rectangular deck with a maximum stacking height.
/// Constant for an entire run; its volume bounds the achievable utilization.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Pallet {
    pub length: f32,
    pub width: f32,
    pub max_height: f32,
    pub volume: f32,
}

impl Pallet {
    pub fn new(length: f32, width: f32, max_height: f32) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0 && max_height > 0.0,
            "pallet dimensions must be positive: {length} x {width}, max height {max_height}"
        );
        Ok(Pallet {
            length,
            width,
            max_height,
            volume: length * width * max_height,
        })
    }
}
