use pallet_rs::entities::PlacementKind;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayerThemes,
    /// Writes the footprint dimensions in the center of each placement
    #[serde(default)]
    pub draw_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayerThemes::default(),
            draw_labels: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayerThemes {
    #[default]
    Classic,
    Gray,
}

impl SvgLayerThemes {
    pub fn theme(&self) -> &'static SvgLayerTheme {
        match self {
            SvgLayerThemes::Classic => &CLASSIC_THEME,
            SvgLayerThemes::Gray => &GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayerTheme {
    pub stroke_width_multiplier: f32,
    pub pallet_fill: &'static str,
    pub primary_fill: &'static str,
    pub strip_x_fill: &'static str,
    pub strip_x_rot_fill: &'static str,
    pub strip_y_fill: &'static str,
    pub strip_y_rot_fill: &'static str,
}

impl SvgLayerTheme {
    pub fn placement_fill(&self, kind: PlacementKind) -> &'static str {
        match kind {
            PlacementKind::Primary => self.primary_fill,
            PlacementKind::StripX => self.strip_x_fill,
            PlacementKind::StripXRot => self.strip_x_rot_fill,
            PlacementKind::StripY => self.strip_y_fill,
            PlacementKind::StripYRot => self.strip_y_rot_fill,
        }
    }
}

pub static CLASSIC_THEME: SvgLayerTheme = SvgLayerTheme {
    stroke_width_multiplier: 2.0,
    pallet_fill: "#CCCCCC",
    primary_fill: "#4ECDC4",
    strip_x_fill: "#FFD166",
    strip_x_rot_fill: "#A7C957",
    strip_y_fill: "#FF9A76",
    strip_y_rot_fill: "#BDD5EA",
};

pub static GRAY_THEME: SvgLayerTheme = SvgLayerTheme {
    stroke_width_multiplier: 2.5,
    pallet_fill: "#FFFFFF",
    primary_fill: "#8F8F8F",
    strip_x_fill: "#A8A8A8",
    strip_x_rot_fill: "#C3C3C3",
    strip_y_fill: "#A8A8A8",
    strip_y_rot_fill: "#C3C3C3",
};
