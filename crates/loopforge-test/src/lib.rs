//! Shared test fixtures for LoopForge crates.
//!
//! This crate deals in plain `&[usize]` tuples and does NOT depend on
//! `loopforge-core`, so the core crate can use it as a dev-dependency
//! without linking a second copy of itself.
//!
//! - [`grid`] - Dense hit counters over a cubic index space
//! - [`cases`] - The double and triple loop matrix with closed-form predicates
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! loopforge-test = { workspace = true }
//! ```

pub mod cases;
pub mod grid;

pub use cases::{Case, LevelShape};
pub use grid::{all_tuples, HitGrid};
