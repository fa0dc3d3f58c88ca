mod carton;
mod layer;
mod pallet;
mod placement;
mod solution;

#[doc(inline)]
pub use carton::Carton;
#[doc(inline)]
pub use carton::Orientation;
#[doc(inline)]
pub use layer::Layer;
#[doc(inline)]
pub use pallet::Pallet;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::PlacementKind;
#[doc(inline)]
pub use solution::StackSolution;
