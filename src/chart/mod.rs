pub mod camera;

pub use camera::*;

use bevy::prelude::*;
use educe::Educe;
use noisy_float::prelude::*;

use crate::{error::GraphError, graph::*, timing::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatGraphs {
    /// Tempo changes. Held until the next change, never interpolated.
    pub bpm: ByPulse<R64>,
    pub scroll_speed: Graph,
}

impl Default for BeatGraphs {
    fn default() -> Self {
        Self {
            bpm: ByPulse::from([(0, r64(120.))]),
            scroll_speed: Graph::from([(0, GraphPoint::new(1.))]),
        }
    }
}

impl BeatGraphs {
    pub fn bpm_at(&self, pulse: Pulse) -> Option<R64> {
        self.bpm.locate(pulse).map(|(_, bpm)| *bpm)
    }

    pub fn scroll_speed_at(&self, pulse: Pulse) -> R64 {
        held_value_at(&self.scroll_speed, pulse).unwrap_or_else(|| r64(1.))
    }
}

/// Left and right laser lanes.
pub type LaserLanes = [ByPulse<LaserSection>; 2];

/// Every continuously varying quantity of a chart, decoded and ready to sample.
#[derive(Debug, Default, Clone, PartialEq, Eq, Resource)]
pub struct ChartGraphs {
    pub beat: BeatGraphs,
    pub camera: CamGraphs,
    pub tilt: Graph,
    pub laser: LaserLanes,
}

impl ChartGraphs {
    pub fn tilt_at(&self, pulse: Pulse) -> R64 {
        held_value_at(&self.tilt, pulse).unwrap_or_else(|| r64(0.))
    }

    /// Laser position per lane, `None` where no section is active.
    pub fn laser_positions(&self, pulse: Pulse) -> [Option<R64>; 2] {
        [&self.laser[0], &self.laser[1]].map(|lane| section_value_at(lane, pulse))
    }

    /// Linear-only view of every graph and lane. Tempo is left as is.
    pub fn expanded(&self, subdivision: RelPulse) -> Result<Self, GraphError> {
        let [left, right] = &self.laser;

        Ok(Self {
            beat: BeatGraphs {
                bpm: self.beat.bpm.clone(),
                scroll_speed: self.beat.scroll_speed.expand_curves(subdivision)?,
            },
            camera: self.camera.expanded(subdivision)?,
            tilt: self.tilt.expand_curves(subdivision)?,
            laser: [expand_lane(left, subdivision)?, expand_lane(right, subdivision)?],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource, Educe)]
#[educe(Default)]
pub struct GraphSettings {
    /// Spacing of linear samples when expanding curves. Defaults to a 1/32 note.
    #[educe(Default = 30)]
    pub subdivision: RelPulse,
    /// Replace a freshly inserted [`ChartGraphs`] with its expanded view.
    pub expand_on_load: bool,
}

#[rustfmt::skip]
pub fn expand_chart(
    settings: Res<GraphSettings>,
    chart: Option<ResMut<ChartGraphs>>,
) {
    let Some(mut chart) = chart.filter(|chart| settings.expand_on_load && chart.is_added()) else {
        return;
    };

    match chart.expanded(settings.subdivision) {
        Ok(expanded) => *chart = expanded,
        Err(error) => warn!("Leaving chart graphs curved: {error}"),
    }
}

pub fn sample_camera(
    song_pulse: Res<SongPulse>,
    chart: Option<Res<ChartGraphs>>,
    mut status: ResMut<CamStatus>,
) {
    if let Some(chart) = chart {
        *status = chart.camera.sample(**song_pulse);
    }
}

pub struct GraphPlugin;

impl Plugin for GraphPlugin {
    fn build(&self, game: &mut App) {
        game.init_resource::<GraphSettings>()
            .init_resource::<SongPulse>()
            .init_resource::<CamStatus>()
            .add_systems((expand_chart, sample_camera).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn curved_tilt() -> Graph {
        Graph::from([
            (0, GraphPoint::curved(0., GraphCurve::new(0.2, 0.8))),
            (RESOLUTION, GraphPoint::new(1.)),
        ])
    }

    fn chart() -> ChartGraphs {
        ChartGraphs {
            beat: BeatGraphs {
                bpm: ByPulse::from([(0, r64(120.)), (RESOLUTION4, r64(180.))]),
                scroll_speed: Graph::from([
                    (RESOLUTION, GraphPoint::new(1.)),
                    (RESOLUTION * 2, GraphPoint::curved(2., GraphCurve::new(1., 0.))),
                    (RESOLUTION * 3, GraphPoint::new(0.5)),
                ]),
            },
            camera: CamGraphs {
                zoom_top: curved_tilt(),
                ..Default::default()
            },
            tilt: curved_tilt(),
            laser: [
                ByPulse::from([(
                    0,
                    LaserSection::new(
                        ByRelPulse::from([
                            (0, GraphPoint::curved(0., GraphCurve::new(0.8, 0.2))),
                            (RESOLUTION, GraphPoint::new(1.)),
                        ]),
                        LaserScale::X1,
                    ),
                )]),
                ByPulse::from([(
                    RESOLUTION,
                    LaserSection::new(
                        ByRelPulse::from([
                            (0, GraphPoint::new(1.)),
                            (RESOLUTION, GraphPoint::new(0.)),
                        ]),
                        LaserScale::X2,
                    ),
                )]),
            ],
        }
    }

    #[test_case(-1, None)]
    #[test_case(0, Some(120.))]
    #[test_case(RESOLUTION4 - 1, Some(120.))]
    #[test_case(RESOLUTION4, Some(180.))]
    fn tempo_steps(pulse: Pulse, expected: Option<f64>) {
        assert_eq!(chart().beat.bpm_at(pulse), expected.map(r64));
    }

    #[test_case(0, 1.; "before first point")]
    #[test_case(RESOLUTION + RESOLUTION / 2, 1.5; "interpolated")]
    #[test_case(RESOLUTION * 4, 0.5; "after last point")]
    fn scroll_speeds(pulse: Pulse, expected: f64) {
        assert_eq!(chart().beat.scroll_speed_at(pulse), r64(expected));
    }

    #[test]
    fn defaults() {
        let beat = BeatGraphs::default();
        assert_eq!(beat.bpm_at(RESOLUTION4), Some(r64(120.)));
        assert_eq!(beat.scroll_speed_at(RESOLUTION4), r64(1.));

        let empty = BeatGraphs { scroll_speed: Graph::new(), ..Default::default() };
        assert_eq!(empty.scroll_speed_at(0), r64(1.));
        assert_eq!(ChartGraphs::default().tilt_at(0), r64(0.));
        assert_eq!(GraphSettings::default().subdivision, RESOLUTION4 / 32);
        assert!(!GraphSettings::default().expand_on_load);
    }

    #[test]
    fn lasers() {
        let chart = chart();
        assert_eq!(chart.laser_positions(RESOLUTION / 2)[1], None);
        assert_eq!(chart.laser_positions(RESOLUTION), [None, Some(r64(1.))]);
        assert_eq!(chart.laser_positions(RESOLUTION * 3 / 2), [None, Some(r64(0.5))]);
        assert_eq!(chart.laser_positions(RESOLUTION * 2), [None, None]);
    }

    #[test]
    fn expanded_view() {
        let chart = chart();
        let expanded = chart.expanded(RESOLUTION / 8).unwrap();

        assert_eq!(expanded.beat.bpm, chart.beat.bpm);
        assert_eq!(expanded.tilt.len(), chart.tilt.len() + 7);
        assert_eq!(expanded.camera.zoom_top, expanded.tilt);
        assert_eq!(expanded.beat.scroll_speed.len(), chart.beat.scroll_speed.len() + 7);
        assert_eq!(expanded.laser[0][&0].v.len(), 2 + 7);
        assert_eq!(expanded.laser[1], chart.laser[1]);
        assert!(expanded.laser[1][&RESOLUTION].wide());

        [0, RESOLUTION].into_iter().for_each(|pulse| {
            assert_eq!(expanded.tilt_at(pulse), chart.tilt_at(pulse));
        });
    }

    #[test]
    fn expansion_rejects_bad_interval() {
        assert_eq!(chart().expanded(0), Err(GraphError::NonPositiveSubdivision(0)));
    }

    fn game(settings: GraphSettings) -> App {
        let mut game = App::new();
        game.add_plugin(GraphPlugin).insert_resource(settings);
        game
    }

    #[test]
    fn camera_follows_song_pulse() {
        let mut game = game(GraphSettings::default());
        game.insert_resource(chart())
            .insert_resource(SongPulse(RESOLUTION));

        game.update();
        assert_eq!(game.world.resource::<CamStatus>().zoom_top, r64(1.));

        game.insert_resource(SongPulse(0));
        game.update();
        assert_eq!(*game.world.resource::<CamStatus>(), CamStatus::default());
    }

    #[test]
    fn camera_idles_without_chart() {
        let mut game = game(GraphSettings::default());
        game.insert_resource(SongPulse(RESOLUTION));

        game.update();
        assert_eq!(*game.world.resource::<CamStatus>(), CamStatus::default());
    }

    #[test_case(false, chart(); "kept curved")]
    #[test_case(true, chart().expanded(30).unwrap(); "expanded on load")]
    fn load_expansion(expand_on_load: bool, expected: ChartGraphs) {
        let mut game = game(GraphSettings { subdivision: 30, expand_on_load });
        game.insert_resource(chart());

        game.update();
        assert_eq!(*game.world.resource::<ChartGraphs>(), expected);

        game.update();
        assert_eq!(*game.world.resource::<ChartGraphs>(), expected);
    }

    #[test]
    fn invalid_settings_leave_chart_curved() {
        let mut game = game(GraphSettings { subdivision: 0, expand_on_load: true });
        game.insert_resource(chart());

        game.update();
        assert_eq!(*game.world.resource::<ChartGraphs>(), chart());
    }
}
