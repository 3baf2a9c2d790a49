//! Fast hashing with FxHash (non-cryptographic).
//!
//! Internal maps key on node ids and dense indices; none of them need a
//! DoS-resistant hasher.

pub use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
