//! Graph adapters.

pub mod undirect;

#[doc(inline)]
pub use undirect::Undirect;
