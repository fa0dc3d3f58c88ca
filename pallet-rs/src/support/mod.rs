mod grid;

#[doc(inline)]
pub use grid::SupportGrid;
