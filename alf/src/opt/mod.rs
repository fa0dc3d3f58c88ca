pub mod alt_stack;
pub mod baseline;
pub mod layer_builder;

//limits the number of layers to be stacked, for debugging purposes
pub const LAYER_LIMIT: usize = usize::MAX;
