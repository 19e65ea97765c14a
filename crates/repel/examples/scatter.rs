//! Scatter demo: random points with label boxes sitting right on them,
//! printed before and after repulsion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use repel::prelude::*;

fn main() -> Result<(), RepelError> {
    let mut rng = StdRng::seed_from_u64(1);
    let points: Vec<Vec2<f64>> = (0..20)
        .map(|_| Vec2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();
    let boxes: Vec<Box2> = points
        .iter()
        .map(|p| Box2::padded_around(*p, 0.08, 0.03))
        .collect();

    let cfg = RepelCfg {
        point_padding_x: 0.01,
        point_padding_y: 0.01,
        xlim: Interval::new(0.0, 1.0),
        ylim: Interval::new(0.0, 1.0),
        force: 1e-4,
        ..RepelCfg::default()
    };
    let out = repel_boxes(&points, &boxes, &cfg)?;

    println!(
        "{} labels, {} sweeps, converged: {}",
        points.len(),
        out.iterations,
        out.converged
    );
    for (p, pos) in points.iter().zip(&out.positions) {
        println!(
            "point ({:6.3}, {:6.3}) -> label ({:6.3}, {:6.3})",
            p.x, p.y, pos.x, pos.y
        );
    }
    Ok(())
}
