//! Label/box repulsion layout kernel.
//!
//! Two layers:
//! - [`geom`]: primitive 2D operations on points and axis-aligned boxes
//!   (distance, centroid, line-rectangle intersection, overlap tests).
//! - [`layout`]: the iterative force layout that pushes label boxes off the
//!   data points and off each other, then lets them settle back home.
//!
//! Host-environment marshaling is deliberately absent: callers hand over
//! plain slices of `Vec2`/`Box2` and get typed results back.

pub mod geom;
pub mod layout;
pub mod log;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write `repel::Vec2`.
pub use geom::{Box2, Interval};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{centroid, euclid, intersect_line_rectangle, Box2, Interval};
    pub use crate::layout::{repel_boxes, Direction, RepelCfg, RepelError, RepelOutcome};
    pub use nalgebra::Vector2 as Vec2;
}
