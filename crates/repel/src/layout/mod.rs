//! Force-directed box repulsion.
//!
//! Purpose
//! - Reposition label boxes so they stop covering data points and each other,
//!   while staying close to the point they annotate and inside axis limits.
//!
//! Model
//! - Overlap-driven sweeps: each box accumulates inverse-square repulsion from
//!   everything it currently overlaps; once free it springs linearly back
//!   toward its home centroid. The loop ends on the first overlap-free sweep
//!   or at the iteration cap, whichever comes first.
//! - Determinism: tie-breaking jitter comes from an `StdRng` seeded from the
//!   config, so identical inputs give identical layouts.

mod forces;
mod solver;
mod types;

pub use solver::repel_boxes;
pub use types::{Direction, RepelCfg, RepelError, RepelOutcome};
