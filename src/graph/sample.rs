use noisy_float::prelude::*;
use tap::Pipe;

use super::{Anchor, Section};
use crate::{timing::*, utils::*};

/// Value at `pulse`, eased between the governing point and its successor.
///
/// `None` before the first point and after the last one. An exact hit on the
/// last point yields its `vf`.
#[rustfmt::skip]
pub fn value_at<P: Anchor>(graph: &ByPulse<P>, pulse: Pulse) -> Option<R64> {
    let (key, point) = graph.locate(pulse)?;

    match graph.next_after(key) {
        Some((next_key, next)) => pulse
            .completion_ratio(key, next_key)
            .pipe(|x| point.curve().eval(x))
            .pipe(|t| point.exit().lerp(&next.entry(), t))
            .pipe(Some),
        None => (key == pulse).then(|| point.exit()),
    }
}

/// Like [`value_at`] but the quantity persists outside the recorded points:
/// the first `v` before them, the last `vf` after them.
pub fn held_value_at<P: Anchor>(graph: &ByPulse<P>, pulse: Pulse) -> Option<R64> {
    value_at(graph, pulse)
        .or_else(|| graph.locate(pulse).map(|(_, point)| point.exit()))
        .or_else(|| graph.first().map(|(_, point)| point.entry()))
}

/// Section governing `pulse` and its start pulse.
pub fn section_at<S>(sections: &ByPulse<S>, pulse: Pulse) -> Option<(Pulse, &S)> {
    sections.locate(pulse)
}

#[rustfmt::skip]
pub fn section_value_at<S: Section>(sections: &ByPulse<S>, pulse: Pulse) -> Option<R64> {
    let (start, section) = section_at(sections, pulse)?;
    let ry = pulse.checked_sub(start)?;

    section
        .has_interior()
        .then(|| section.span())
        .flatten()
        .filter(|(first, last)| (*first..*last).contains(&ry))
        .and_then(|_| value_at(section.points(), ry))
}

pub fn section_value_at_or<S: Section>(sections: &ByPulse<S>, pulse: Pulse, default: R64) -> R64 {
    section_value_at(sections, pulse).unwrap_or(default)
}

/// Point stored exactly at `pulse`, no interpolation.
pub fn point_at<P>(graph: &ByPulse<P>, pulse: Pulse) -> Option<&P> {
    graph.get(&pulse)
}

pub fn section_point_at<S: Section>(sections: &ByPulse<S>, pulse: Pulse) -> Option<&S::Point> {
    section_at(sections, pulse).and_then(|(start, section)| {
        pulse
            .checked_sub(start)
            .and_then(|ry| point_at(section.points(), ry))
    })
}
