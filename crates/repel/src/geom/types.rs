//! Basic 2D types: axis-aligned boxes and axis limits.

use nalgebra::Vector2;

/// Closed 1D interval `[lo, hi]`, used for per-axis layout limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// No-op limits: clamping against this interval never moves anything.
    pub const UNBOUNDED: Interval = Interval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::UNBOUNDED
    }
}

/// Axis-aligned box in corner form. Callers are expected to supply
/// `x1 <= x2` and `y1 <= y2`; degenerate (zero-area) boxes are fine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2 {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Box2 {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Exclusion box of half-extent `pad_x` x `pad_y` around a data point.
    #[inline]
    pub fn padded_around(p: Vector2<f64>, pad_x: f64, pad_y: f64) -> Self {
        Self {
            x1: p.x - pad_x,
            y1: p.y - pad_y,
            x2: p.x + pad_x,
            y2: p.y + pad_y,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Closed-interval overlap test: boxes sharing only an edge still overlap.
    #[inline]
    pub fn overlaps(&self, other: &Box2) -> bool {
        other.x1 <= self.x2 && other.y1 <= self.y2 && other.x2 >= self.x1 && other.y2 >= self.y1
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.x1 <= p.x && p.x <= self.x2 && self.y1 <= p.y && p.y <= self.y2
    }

    #[inline]
    pub fn translate(&self, d: Vector2<f64>) -> Box2 {
        Box2 {
            x1: self.x1 + d.x,
            y1: self.y1 + d.y,
            x2: self.x2 + d.x,
            y2: self.y2 + d.y,
        }
    }

    /// Shift the box, without resizing, back inside the limits.
    ///
    /// The low-edge correction is applied last, so a box larger than an
    /// interval ends flush with the interval's low edge.
    pub fn clamp_to(&self, xlim: Interval, ylim: Interval) -> Box2 {
        let mut b = *self;
        if b.x2 > xlim.hi {
            b = b.translate(Vector2::new(xlim.hi - b.x2, 0.0));
        }
        if b.x1 < xlim.lo {
            b = b.translate(Vector2::new(xlim.lo - b.x1, 0.0));
        }
        if b.y2 > ylim.hi {
            b = b.translate(Vector2::new(0.0, ylim.hi - b.y2));
        }
        if b.y1 < ylim.lo {
            b = b.translate(Vector2::new(0.0, ylim.lo - b.y1));
        }
        b
    }
}
