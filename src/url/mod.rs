//! URL handling for hostscope
//!
//! This module canonicalizes URLs into the string form the rest of the
//! crawler treats as a key, resolves relative references, and decides
//! host-scope membership.

mod normalize;
mod scope;

pub use normalize::{normalize, resolve};
pub use scope::in_scope;
