use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use bevy::prelude::*;
use derive_more::{Deref, DerefMut, From};

/// Absolute musical time in ticks.
pub type Pulse = i64;
/// Tick offset from the start of a section.
pub type RelPulse = i64;

/// Pulses per quarter note.
pub const RESOLUTION: Pulse = 240;
/// Pulses per whole note.
pub const RESOLUTION4: Pulse = RESOLUTION * 4;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deref, DerefMut, From, Resource)]
pub struct SongPulse(pub Pulse);

/// Entries ordered by unique pulse keys. Used both for absolute timelines and,
/// keyed by [`RelPulse`], inside sections.
#[derive(Debug, Clone, PartialEq, Eq, Deref, DerefMut, From)]
pub struct Timeline<T>(BTreeMap<Pulse, T>);

pub type ByPulse<T> = Timeline<T>;
pub type ByRelPulse<T> = Timeline<T>;

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry with the greatest key `<= pulse`.
    ///
    /// Finds the first key strictly after `pulse` and steps back to its
    /// predecessor, so an exact key match governs its own pulse.
    pub fn locate(&self, pulse: Pulse) -> Option<(Pulse, &T)> {
        self.range(..=pulse)
            .next_back()
            .map(|(&key, entry)| (key, entry))
    }

    /// First entry strictly after `key`.
    pub fn next_after(&self, key: Pulse) -> Option<(Pulse, &T)> {
        self.range((Excluded(key), Unbounded))
            .next()
            .map(|(&key, entry)| (key, entry))
    }

    pub fn first(&self) -> Option<(Pulse, &T)> {
        self.first_key_value().map(|(&key, entry)| (key, entry))
    }

    pub fn last(&self) -> Option<(Pulse, &T)> {
        self.last_key_value().map(|(&key, entry)| (key, entry))
    }
}

impl<T> FromIterator<(Pulse, T)> for Timeline<T> {
    fn from_iter<I: IntoIterator<Item = (Pulse, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T, const N: usize> From<[(Pulse, T); N]> for Timeline<T> {
    fn from(entries: [(Pulse, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Timeline<T> {
    type Item = (&'a Pulse, &'a T);
    type IntoIter = std::collections::btree_map::Iter<'a, Pulse, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
