use crate::timing::Pulse;
use noisy_float::prelude::*;

pub trait Lerp {
    type Output;
    fn lerp(&self, other: &Self, t: R64) -> Self::Output;
}

impl Lerp for R64 {
    type Output = Self;

    fn lerp(&self, other: &Self, t: R64) -> Self::Output {
        *self + (*other - *self) * t
    }
}

pub trait CompletionRatio {
    /// Position of `self` within `[start, end)` as a ratio of pulse distances.
    /// Callers guarantee `start < end`. Distances are taken in `i128` so keys
    /// at opposite ends of the pulse range do not overflow.
    fn completion_ratio(self, start: Self, end: Self) -> R64;
}

impl CompletionRatio for Pulse {
    fn completion_ratio(self, start: Self, end: Self) -> R64 {
        let [from, to, pulse] = [start, end, self].map(i128::from);
        r64((pulse - from) as f64 / (to - from) as f64)
    }
}

pub trait AlmostEq {
    fn almost_eq(self, other: Self) -> bool;
}

impl AlmostEq for f64 {
    fn almost_eq(self, other: Self) -> bool {
        (self - other).abs() <= f64::EPSILON * 4. * self.abs().max(other.abs()).max(1.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0., 0.; "start")]
    #[test_case(0.25, 1.25; "quarter")]
    #[test_case(1., 2.; "end")]
    fn lerp_unit(t: f64, expected: f64) {
        assert_eq!(r64(1.).lerp(&r64(2.), r64(t)), r64(expected));
    }

    #[test_case(50, 0, 100, 0.5)]
    #[test_case(125, 100, 200, 0.25)]
    #[test_case(-50, -100, 100, 0.25)]
    #[test_case(Pulse::MAX, Pulse::MIN, Pulse::MAX, 1.; "full range end")]
    #[test_case(Pulse::MIN, Pulse::MIN, Pulse::MAX, 0.; "full range start")]
    fn ratios(pulse: Pulse, start: Pulse, end: Pulse, expected: f64) {
        assert_eq!(pulse.completion_ratio(start, end), r64(expected));
    }

    #[test]
    fn almost_equal() {
        assert!(0.5_f64.almost_eq(0.5));
        assert!((0.1_f64 + 0.4).almost_eq(0.5));
        assert!(!0.5_f64.almost_eq(0.5 + 1e-9));
    }
}
