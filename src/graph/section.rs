use educe::Educe;

use super::{Anchor, GraphPoint};
use crate::{error::GraphError, timing::*};

/// A run of points local to a start pulse. The start pulse is the key the
/// section is stored under in its lane.
pub trait Section: Sized {
    type Point: Anchor;

    fn points(&self) -> &ByRelPulse<Self::Point>;

    /// Same section metadata over a different set of points.
    fn with_points(&self, points: ByRelPulse<Self::Point>) -> Self;

    /// Less than two points leaves nothing to interpolate.
    fn has_interior(&self) -> bool {
        2 <= self.points().len()
    }

    /// First and last relative keys.
    fn span(&self) -> Option<(RelPulse, RelPulse)> {
        self.points()
            .first()
            .zip(self.points().last())
            .map(|((first, _), (last, _))| (first, last))
    }

    fn end_pulse(&self, start: Pulse) -> Option<Pulse> {
        self.span().map(|(_, last)| start + last)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GraphSection {
    pub v: ByRelPulse<GraphPoint>,
}

impl From<ByRelPulse<GraphPoint>> for GraphSection {
    fn from(v: ByRelPulse<GraphPoint>) -> Self {
        Self { v }
    }
}

impl Section for GraphSection {
    type Point = GraphPoint;

    fn points(&self) -> &ByRelPulse<GraphPoint> {
        &self.v
    }

    fn with_points(&self, v: ByRelPulse<GraphPoint>) -> Self {
        Self { v }
    }
}

/// Horizontal scale of a laser section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe)]
#[educe(Default)]
#[repr(i32)]
pub enum LaserScale {
    #[educe(Default)]
    X1 = 1,
    X2 = 2,
}

impl TryFrom<i32> for LaserScale {
    type Error = GraphError;

    fn try_from(factor: i32) -> Result<Self, Self::Error> {
        match factor {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            _ => Err(GraphError::InvalidLaserScale(factor)),
        }
    }
}

impl From<LaserScale> for i32 {
    fn from(scale: LaserScale) -> Self {
        scale as i32
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LaserSection {
    pub v: ByRelPulse<GraphPoint>,
    pub w: LaserScale,
}

impl LaserSection {
    pub fn new(v: ByRelPulse<GraphPoint>, w: LaserScale) -> Self {
        Self { v, w }
    }

    pub fn wide(&self) -> bool {
        self.w == LaserScale::X2
    }
}

impl Section for LaserSection {
    type Point = GraphPoint;

    fn points(&self) -> &ByRelPulse<GraphPoint> {
        &self.v
    }

    fn with_points(&self, v: ByRelPulse<GraphPoint>) -> Self {
        Self { v, w: self.w }
    }
}
