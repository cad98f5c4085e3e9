//! rfdeploy-core — equipment recommendation and deployment geometry
//! engine for planning RFeye sensor field deployments.
//!
//! Pipeline (each stage feeds the next):
//!   1. `scenario`  — validated mission description from the form
//!   2. `equipment` — decision-table selection (+ `quantity` estimate)
//!   3. `placement` — initial sensor ring and user-edited layout
//!   4. `coverage` / `cost` — shared aggregation formulas
//!   5. `report`    — read-only export document
//!
//! The `workflow` module carries the wizard state forward as explicit
//! immutable stage values. Everything in this crate is synchronous,
//! deterministic, and I/O-free.

pub mod catalog;
pub mod cost;
pub mod coverage;
pub mod equipment;
pub mod error;
pub mod placement;
pub mod quantity;
pub mod report;
pub mod scenario;
pub mod types;
pub mod workflow;
