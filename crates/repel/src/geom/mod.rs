//! Primitive 2D geometry for label layout.
//!
//! Purpose
//! - Provide the small set of operations the repulsion solver is built from:
//!   Euclidean distance, box centroids, closed-interval overlap tests, and
//!   line-rectangle intersection for leader lines.
//! - Keep the API minimal and numerically explicit; partial operations return
//!   `Option` instead of sentinel values.

mod ops;
mod types;

pub use ops::{centroid, euclid, intersect_line_rectangle};
pub use types::{Box2, Interval};
