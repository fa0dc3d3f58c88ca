/// Axis-aligned rectangular footprint of a carton within a layer.
/// `(x, y)` is the corner closest to the pallet origin, `l` extends along the
/// x-axis and `w` along the y-axis.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Footprint {
    pub x: f32,
    pub y: f32,
    pub l: f32,
    pub w: f32,
}

impl Footprint {
    pub fn new(x: f32, y: f32, l: f32, w: f32) -> Self {
        debug_assert!(x >= 0.0 && y >= 0.0 && l > 0.0 && w > 0.0);
        Footprint { x, y, l, w }
    }

    #[inline(always)]
    pub fn x_max(&self) -> f32 {
        self.x + self.l
    }

    #[inline(always)]
    pub fn y_max(&self) -> f32 {
        self.y + self.w
    }

    pub fn area(&self) -> f32 {
        self.l * self.w
    }

    /// Strict separating-axis overlap test.
    /// Footprints that merely touch along an edge do not collide.
    #[inline(always)]
    pub fn collides_with(&self, other: &Footprint) -> bool {
        self.x < other.x_max()
            && self.x_max() > other.x
            && self.y < other.y_max()
            && self.y_max() > other.y
    }

    /// The four integer cells under the corners of the footprint, in
    /// (x, y) order: origin, far-x, far-y, far-x-far-y.
    /// Coordinates are truncated; `x + l - 1` is clamped at cell 0 for
    /// sub-unit footprints near the origin.
    pub fn corner_cells(&self) -> [(usize, usize); 4] {
        let x_min = self.x as usize;
        let y_min = self.y as usize;
        let x_far = f32::max(self.x + self.l - 1.0, 0.0) as usize;
        let y_far = f32::max(self.y + self.w - 1.0, 0.0) as usize;
        [(x_min, y_min), (x_far, y_min), (x_min, y_far), (x_far, y_far)]
    }
}
