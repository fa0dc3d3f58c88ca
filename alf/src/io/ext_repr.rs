use serde::{Deserialize, Serialize};

/// The JSON representation of a stacking instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(rename = "Name")]
    pub name: String,
    /// The carton to be stacked
    #[serde(rename = "Carton")]
    pub carton: ExtCarton,
    /// The pallet to stack it on
    #[serde(rename = "Pallet")]
    pub pallet: ExtPallet,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ExtCarton {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ExtPallet {
    pub length: f32,
    pub width: f32,
    pub max_height: f32,
}

/// The JSON representation of a stacking solution
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ExtSolution {
    /// The winning orientation as (l, w, h)
    pub orientation: [f32; 3],
    pub total_cartons: usize,
    pub n_layers: usize,
    /// Volume of the stacked cartons divided by the pallet volume, capped at 1
    pub utilization: f32,
    pub total_volume: f32,
    pub pallet_volume: f32,
    pub layers: Vec<ExtLayer>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ExtLayer {
    /// 1-based tier index
    pub layer: usize,
    /// Height of the underside of this layer
    pub z: f32,
    pub placements: Vec<ExtPlacement>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ExtPlacement {
    /// Which pass of the layer builder produced this placement
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub l: f32,
    pub w: f32,
}
