use bevy::log::trace;
use noisy_float::prelude::*;

use super::GraphCurve;
use crate::utils::AlmostEq;

/// Quadratic easing through control `(a, b)`:
///
/// ```text
/// t = (a - sqrt(a² + x - 2ax)) / (2a - 1)
/// y = 2(1 - t)tb + t²
/// ```
///
/// Every input is clamped to `[0, 1]` first. Configurations the formula cannot
/// handle (`a = 0.5`, negative discriminant) fall back to `y = x`.
#[rustfmt::skip]
pub fn evaluate_curve(a: R64, b: R64, x: R64) -> R64 {
    let [a, b, x] = [a, b, x].map(|n| n.raw().clamp(0., 1.));

    if a.almost_eq(0.5) {
        trace!("curve ({a}, {b}) has a vanishing denominator, evaluating linearly");
        return r64(x);
    }

    let discriminant = a * a + x - 2. * a * x;
    if discriminant < 0. {
        trace!("curve ({a}, {b}) has no solution at {x}, evaluating linearly");
        return r64(x);
    }

    let t = (a - discriminant.sqrt()) / (2. * a - 1.);
    r64((2. * (1. - t) * t * b + t * t).clamp(0., 1.))
}

impl GraphCurve {
    pub fn eval(&self, x: R64) -> R64 {
        if self.is_linear() {
            x
        } else {
            evaluate_curve(self.a, self.b, x)
        }
    }
}
