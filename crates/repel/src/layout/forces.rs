//! The two force terms of the layout model.

use nalgebra::Vector2;
use rand::Rng;

use super::types::Direction;
use crate::geom::euclid;

/// Floor on the squared distance so repulsion between coincident centroids
/// stays finite.
const MIN_D2: f64 = 4e-4;

/// Springs shorter than this exert nothing; keeps settled boxes still.
const SPRING_DEAD_ZONE: f64 = 0.01;

/// Inverse-square repulsion upon `a` from `b`.
///
/// `a` is jittered by `uniform(-force, force)` per component before the
/// distance is taken, so two boxes stacked exactly on top of each other still
/// pick a separation direction.
pub(crate) fn repel_force<R: Rng>(
    a: Vector2<f64>,
    b: Vector2<f64>,
    force: f64,
    direction: Direction,
    rng: &mut R,
) -> Vector2<f64> {
    let a = a + Vector2::new(
        rng.gen_range(-force..=force),
        rng.gen_range(-force..=force),
    );
    let v = a - b;
    let d2 = v.norm_squared().max(MIN_D2);
    let f = v / d2.sqrt() * (force / d2);
    direction.project(f)
}

/// Linear spring upon `a` from `b`: pulls a free box back toward home.
pub(crate) fn spring_force(
    a: Vector2<f64>,
    b: Vector2<f64>,
    force: f64,
    direction: Direction,
) -> Vector2<f64> {
    if euclid(a, b) <= SPRING_DEAD_ZONE {
        return Vector2::zeros();
    }
    direction.project((a - b) * force)
}
