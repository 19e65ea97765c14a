//! Config, outcome, and error types for the repulsion solver.
//!
//! Kept small and explicit to make `forces` and `solver` easy to read.

use std::str::FromStr;

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom::Interval;

/// Axes a box is allowed to move along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Both,
    X,
    Y,
}

impl Direction {
    /// Zero the disallowed component of a force.
    #[inline]
    pub(crate) fn project(self, f: Vector2<f64>) -> Vector2<f64> {
        match self {
            Direction::Both => f,
            Direction::X => Vector2::new(f.x, 0.0),
            Direction::Y => Vector2::new(0.0, f.y),
        }
    }
}

impl FromStr for Direction {
    type Err = RepelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Direction::Both),
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            _ => Err(RepelError::UnknownDirection(s.to_string())),
        }
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct RepelCfg {
    /// Half-extent of the exclusion box around each data point (x axis).
    /// Point repulsion is disabled unless both paddings are positive.
    pub point_padding_x: f64,
    /// Half-extent of the exclusion box around each data point (y axis).
    pub point_padding_y: f64,
    /// Boxes are clamped back inside these limits after every move.
    pub xlim: Interval,
    pub ylim: Interval,
    /// Base force constant. Also the amplitude of the tie-breaking jitter.
    pub force: f64,
    /// Iteration cap for the sweep loop.
    pub maxiter: usize,
    /// Allowed movement axes.
    pub direction: Direction,
    /// Seed for the jitter RNG; same seed, same layout.
    pub seed: u64,
}

impl Default for RepelCfg {
    fn default() -> Self {
        Self {
            point_padding_x: 0.0,
            point_padding_y: 0.0,
            xlim: Interval::UNBOUNDED,
            ylim: Interval::UNBOUNDED,
            force: 1e-6,
            maxiter: 2000,
            direction: Direction::Both,
            seed: 0,
        }
    }
}

/// Final layout plus convergence metadata.
#[derive(Clone, Debug)]
pub struct RepelOutcome {
    /// Final centroid of each box, in input order.
    pub positions: Vec<Vector2<f64>>,
    /// Sweeps executed (including the final overlap-free one).
    pub iterations: usize,
    /// True when an overlap-free sweep was observed before the cap.
    pub converged: bool,
}

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum RepelError {
    #[error("{points} data points but {boxes} boxes")]
    CountMismatch { points: usize, boxes: usize },
    #[error("force must be finite and non-negative, got {0}")]
    InvalidForce(f64),
    #[error("inverted {axis} limits: [{lo}, {hi}]")]
    InvertedLimits { axis: char, lo: f64, hi: f64 },
    #[error("unknown direction {0:?} (expected \"both\", \"x\", or \"y\")")]
    UnknownDirection(String),
}
