use crate::geometry::Footprint;

/// Which pass of the layer builder produced a placement.
/// Exhaustive, so downstream consumers (color mapping, reporting) can match on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub enum PlacementKind {
    /// Regular grid of the layer's footprint.
    Primary,
    /// Fill of the leftover strip along the x-axis.
    StripX,
    /// 90°-rotated fill of the leftover strip along the x-axis.
    StripXRot,
    /// Fill of the leftover strip along the y-axis.
    StripY,
    /// 90°-rotated fill of the leftover strip along the y-axis.
    StripYRot,
}

impl PlacementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementKind::Primary => "primary",
            PlacementKind::StripX => "strip_x",
            PlacementKind::StripXRot => "strip_x_rot",
            PlacementKind::StripY => "strip_y",
            PlacementKind::StripYRot => "strip_y_rot",
        }
    }
}

/// A single carton footprint committed to a [`Layer`](crate::entities::Layer).
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Placement {
    pub kind: PlacementKind,
    pub footprint: Footprint,
}
