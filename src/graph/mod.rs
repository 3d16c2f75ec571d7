pub mod curve;
pub mod expand;
pub mod sample;
pub mod section;

pub use curve::*;
pub use expand::*;
pub use sample::*;
pub use section::*;

use crate::{timing::*, utils::*};
use noisy_float::prelude::*;

/// `v` is approached on entry to a point, `vf` holds right after it. The two
/// differ only at a slam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphValue {
    pub v: R64,
    pub vf: R64,
}

impl GraphValue {
    pub fn new(v: R64) -> Self {
        Self { v, vf: v }
    }

    pub fn slam(v: R64, vf: R64) -> Self {
        Self { v, vf }
    }

    pub fn is_slam(&self) -> bool {
        self.v != self.vf
    }
}

impl From<f64> for GraphValue {
    fn from(v: f64) -> Self {
        Self::new(r64(v))
    }
}

impl From<(f64, f64)> for GraphValue {
    fn from((v, vf): (f64, f64)) -> Self {
        Self::slam(r64(v), r64(vf))
    }
}

impl Lerp for GraphValue {
    type Output = R64;

    /// Travels from the value after this point's slam to the value the next
    /// point is approached with.
    fn lerp(&self, next: &Self, t: R64) -> Self::Output {
        self.vf.lerp(&next.v, t)
    }
}

/// Easing of the segment leaving a point. Components are clamped to `[0, 1]`
/// on construction and again on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphCurve {
    pub a: R64,
    pub b: R64,
}

impl GraphCurve {
    /// Unchecked components from ingestion are clamped, infinities included.
    /// NaN reads as `0`.
    pub fn new(a: f64, b: f64) -> Self {
        let [a, b] = [a, b].map(|n| r64(n.max(0.).min(1.)));
        Self { a, b }
    }

    pub fn linear() -> Self {
        Self::new(0., 0.)
    }

    /// A control point on the diagonal makes the curve the identity.
    pub fn is_linear(&self) -> bool {
        self.a == self.b
    }
}

impl Default for GraphCurve {
    fn default() -> Self {
        Self::linear()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphPoint {
    pub v: GraphValue,
    pub curve: GraphCurve,
}

impl GraphPoint {
    pub fn new(v: impl Into<GraphValue>) -> Self {
        Self::curved(v, GraphCurve::linear())
    }

    pub fn curved(v: impl Into<GraphValue>, curve: GraphCurve) -> Self {
        Self { v: v.into(), curve }
    }
}

impl From<GraphValue> for GraphPoint {
    fn from(v: GraphValue) -> Self {
        Self::new(v)
    }
}

/// A control point that the sampler and expander can travel between.
pub trait Anchor: Copy {
    fn entry(&self) -> R64;
    fn exit(&self) -> R64;
    fn curve(&self) -> GraphCurve;
    /// Point inserted by curve expansion: no slam, linear onwards.
    fn linear(value: R64) -> Self;
}

impl Anchor for GraphPoint {
    fn entry(&self) -> R64 {
        self.v.v
    }

    fn exit(&self) -> R64 {
        self.v.vf
    }

    fn curve(&self) -> GraphCurve {
        self.curve
    }

    fn linear(value: R64) -> Self {
        Self::new(GraphValue::new(value))
    }
}

impl Anchor for GraphValue {
    fn entry(&self) -> R64 {
        self.v
    }

    fn exit(&self) -> R64 {
        self.vf
    }

    fn curve(&self) -> GraphCurve {
        GraphCurve::linear()
    }

    fn linear(value: R64) -> Self {
        Self::new(value)
    }
}

pub type Graph = ByPulse<GraphPoint>;
