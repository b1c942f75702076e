//! LoopForge Core - Bound descriptors and nested-loop expansion
//!
//! This crate provides the building blocks shared by the runtime API and
//! the `for_constexpr!` macro:
//! - Bound descriptors for plain and symmetric (triangular) loop levels
//! - Validation that rejects malformed nests before anything is iterated
//! - Runtime nests with lexicographic iteration
//! - Compile-time indices, tuple folds and type lists
//! - Closed-set dispatch and trait detection

pub mod bounds;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod nest;
pub mod tuple;

pub use bounds::{validate, Bound, MAX_DEPTH};
pub use dispatch::{Has, HasNot, Presence};
pub use error::{BoundError, Result};
pub use index::Index;
pub use nest::{DynNest, IndexTuple, Nest, Tuples};
