//! Overlap-driven sweep loop.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::forces::{repel_force, spring_force};
use super::types::{RepelCfg, RepelError, RepelOutcome};
use crate::geom::{centroid, Box2};
use crate::log::debug;

/// Box-box repulsion is twice as strong as box-point repulsion.
const BOX_MULTIPLIER: f64 = 2.0;
/// Spring stiffness relative to the base force constant.
const SPRING_MULTIPLIER: f64 = 100.0;

/// Repel label boxes away from data points and from each other.
///
/// `points[i]` is the data point annotated by `boxes[i]`. Runs up to
/// `cfg.maxiter` sweeps and stops early on the first sweep in which nothing
/// overlapped. Returns the final box centroids together with the sweep count
/// and a convergence flag.
pub fn repel_boxes(
    points: &[Vector2<f64>],
    boxes: &[Box2],
    cfg: &RepelCfg,
) -> Result<RepelOutcome, RepelError> {
    validate(points, boxes, cfg)?;

    let n = boxes.len();
    let point_repulsion = cfg.point_padding_x > 0.0 && cfg.point_padding_y > 0.0;
    let exclusions: Vec<Box2> = points
        .iter()
        .map(|p| Box2::padded_around(*p, cfg.point_padding_x, cfg.point_padding_y))
        .collect();
    let home: Vec<Vector2<f64>> = boxes.iter().map(centroid).collect();
    let mut boxes: Vec<Box2> = boxes.to_vec();
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let mut iterations = 0;
    let mut any_overlaps = true;
    while any_overlaps && iterations < cfg.maxiter {
        iterations += 1;
        any_overlaps = false;

        for i in 0..n {
            let mut i_overlaps = false;
            let mut f = Vector2::zeros();
            let ci = centroid(&boxes[i]);

            for j in 0..n {
                if i == j {
                    // Repel the box off its own data point.
                    if point_repulsion && boxes[i].overlaps(&exclusions[i]) {
                        any_overlaps = true;
                        i_overlaps = true;
                        f += repel_force(ci, points[i], cfg.force, cfg.direction, &mut rng);
                    }
                } else {
                    // Repel the box off overlapping boxes.
                    if boxes[i].overlaps(&boxes[j]) {
                        any_overlaps = true;
                        i_overlaps = true;
                        let cj = centroid(&boxes[j]);
                        f += repel_force(ci, cj, cfg.force * BOX_MULTIPLIER, cfg.direction, &mut rng);
                    }
                    // Repel the box off other data points.
                    if point_repulsion && boxes[i].overlaps(&exclusions[j]) {
                        any_overlaps = true;
                        i_overlaps = true;
                        f += repel_force(ci, points[j], cfg.force, cfg.direction, &mut rng);
                    }
                }
            }

            // A free box drifts back toward where it started.
            if !i_overlaps {
                f += spring_force(home[i], ci, cfg.force * SPRING_MULTIPLIER, cfg.direction);
            }

            boxes[i] = boxes[i].translate(f).clamp_to(cfg.xlim, cfg.ylim);
        }

        debug!(sweep = iterations, any_overlaps, "repel sweep done");
    }

    Ok(RepelOutcome {
        positions: boxes.iter().map(centroid).collect(),
        iterations,
        converged: !any_overlaps,
    })
}

fn validate(points: &[Vector2<f64>], boxes: &[Box2], cfg: &RepelCfg) -> Result<(), RepelError> {
    if points.len() != boxes.len() {
        return Err(RepelError::CountMismatch {
            points: points.len(),
            boxes: boxes.len(),
        });
    }
    if !cfg.force.is_finite() || cfg.force < 0.0 {
        return Err(RepelError::InvalidForce(cfg.force));
    }
    for (axis, lim) in [('x', cfg.xlim), ('y', cfg.ylim)] {
        if lim.lo > lim.hi {
            return Err(RepelError::InvertedLimits {
                axis,
                lo: lim.lo,
                hi: lim.hi,
            });
        }
    }
    Ok(())
}
