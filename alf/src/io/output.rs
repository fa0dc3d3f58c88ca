use serde::{Deserialize, Serialize};

use crate::config::AlfConfig;
use crate::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// `None` when no orientation yields a feasible layout
    pub solution: Option<ExtSolution>,
    /// The straight-grid reference the solution is compared against
    pub baseline: Option<ExtSolution>,
    pub config: AlfConfig,
}
