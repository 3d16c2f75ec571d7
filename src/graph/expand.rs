use core::iter::once as iter_once;

use bevy::log::debug;
use itertools::Itertools;
use tap::Pipe;

use super::{Anchor, GraphSection, LaserSection, Section};
use crate::{error::GraphError, timing::*, utils::*};

/// Materializes a piecewise-linear view of curved segments.
///
/// Every original point is kept. Inside each curved segment a linear point is
/// inserted every `subdivision` pulses. Linear segments are copied as is.
pub trait ExpandCurves: Sized {
    fn expand_curves(&self, subdivision: RelPulse) -> Result<Self, GraphError>;
}

fn ensure_positive(subdivision: RelPulse) -> Result<(), GraphError> {
    (0 < subdivision)
        .then_some(())
        .ok_or(GraphError::NonPositiveSubdivision(subdivision))
}

#[rustfmt::skip]
fn subdivide<P: Anchor>(
    (start, from): (Pulse, P),
    (end, to): (Pulse, P),
    subdivision: RelPulse,
)
    -> impl Iterator<Item = (Pulse, P)>
{
    let curve = from.curve();
    let length = if curve.is_linear() { 0 } else { end.saturating_sub(start) };

    (subdivision..length)
        .step_by(subdivision as usize)
        .map(move |ry| ry
            .completion_ratio(0, length)
            .pipe(|x| curve.eval(x))
            .pipe(|t| P::linear(from.exit().lerp(&to.entry(), t)))
            .pipe(|point| (start + ry, point))
        )
}

impl<P: Anchor> ExpandCurves for ByPulse<P> {
    #[rustfmt::skip]
    fn expand_curves(&self, subdivision: RelPulse) -> Result<Self, GraphError> {
        ensure_positive(subdivision)?;

        let expanded = self
            .first()
            .map(|(key, point)| (key, *point))
            .into_iter()
            .chain(self
                .iter()
                .map(|(&key, point)| (key, *point))
                .tuple_windows::<(_, _)>()
                .flat_map(|(from, to)| subdivide(from, to, subdivision).chain(iter_once(to)))
            )
            .collect::<Self>();

        debug!(
            "expanded {} points into {} at {subdivision} pulse subdivision",
            self.len(),
            expanded.len()
        );

        Ok(expanded)
    }
}

fn expand_section<S: Section>(section: &S, subdivision: RelPulse) -> Result<S, GraphError> {
    section
        .points()
        .expand_curves(subdivision)
        .map(|points| section.with_points(points))
}

impl ExpandCurves for GraphSection {
    fn expand_curves(&self, subdivision: RelPulse) -> Result<Self, GraphError> {
        expand_section(self, subdivision)
    }
}

impl ExpandCurves for LaserSection {
    fn expand_curves(&self, subdivision: RelPulse) -> Result<Self, GraphError> {
        expand_section(self, subdivision)
    }
}

/// Expands every section of a lane, keeping section start pulses.
pub fn expand_lane<S: Section>(lane: &ByPulse<S>, subdivision: RelPulse) -> Result<ByPulse<S>, GraphError> {
    ensure_positive(subdivision)?;

    lane.iter()
        .map(|(&start, section)| expand_section(section, subdivision).map(|section| (start, section)))
        .collect()
}
