//! Hash collection aliases used across the workspace.
//!
//! FxHash is a fast, non-cryptographic hasher; catalog ids are small
//! integers with no adversarial input, so HashDoS resistance buys nothing.

pub use rustc_hash::{FxHashMap, FxHashSet};
