use bevy::prelude::*;
use noisy_float::prelude::*;

use crate::{error::GraphError, graph::*, timing::*};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CamGraphs {
    pub zoom_bottom: Graph,
    pub zoom_side: Graph,
    pub zoom_top: Graph,
    pub rotation_deg: Graph,
    pub center_split: Graph,
}

/// Camera state at a single pulse. Unedited graphs read as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct CamStatus {
    pub zoom_bottom: R64,
    pub zoom_side: R64,
    pub zoom_top: R64,
    pub rotation_deg: R64,
    pub center_split: R64,
}

impl Default for CamStatus {
    fn default() -> Self {
        Self {
            zoom_bottom: r64(0.),
            zoom_side: r64(0.),
            zoom_top: r64(0.),
            rotation_deg: r64(0.),
            center_split: r64(0.),
        }
    }
}

impl CamGraphs {
    #[rustfmt::skip]
    pub fn sample(&self, pulse: Pulse) -> CamStatus {
        let at = |graph: &Graph| held_value_at(graph, pulse).unwrap_or_else(|| r64(0.));

        CamStatus {
            zoom_bottom: at(&self.zoom_bottom),
            zoom_side: at(&self.zoom_side),
            zoom_top: at(&self.zoom_top),
            rotation_deg: at(&self.rotation_deg),
            center_split: at(&self.center_split),
        }
    }

    pub fn expanded(&self, subdivision: RelPulse) -> Result<Self, GraphError> {
        Ok(Self {
            zoom_bottom: self.zoom_bottom.expand_curves(subdivision)?,
            zoom_side: self.zoom_side.expand_curves(subdivision)?,
            zoom_top: self.zoom_top.expand_curves(subdivision)?,
            rotation_deg: self.rotation_deg.expand_curves(subdivision)?,
            center_split: self.center_split.expand_curves(subdivision)?,
        })
    }
}
