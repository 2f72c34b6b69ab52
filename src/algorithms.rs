pub mod visibility;

#[doc(inline)]
pub use visibility::naive::compute_visibility;
