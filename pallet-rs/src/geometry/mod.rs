mod footprint;

#[doc(inline)]
pub use footprint::Footprint;
