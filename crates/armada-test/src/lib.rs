//! Shared test fixtures for Armada crates.
//!
//! This crate provides plain problem data and invariant checks for testing.
//! It does NOT depend on `armada-solver`, so the solver can use it as a
//! dev-dependency.
//!
//! - [`scenario`] - Ready-made rosters, unit sizes and pair lists
//! - [`invariants`] - Assertions every returned solution must satisfy
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! armada-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use armada_test::{assert_solution_invariants, Scenario};
//! ```

pub mod invariants;
pub mod scenario;

pub use invariants::{
    assert_blacklist, assert_capacity, assert_partition, assert_rapport_counts,
    assert_solution_invariants, assert_whitelist,
};
pub use scenario::Scenario;
