use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the ALF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct AlfConfig {
    /// Evaluate the 6 carton orientations on separate worker threads.
    /// Orientation evaluations share no mutable state, so this does not
    /// affect the result.
    pub parallel_orientations: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for AlfConfig {
    fn default() -> Self {
        Self {
            parallel_orientations: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
