use foundation::math::projection::Projection;
use layers::basemap::BasemapLayer;
use layers::tracks::TrackLayer;
use render::surface::MapCanvas;
use runtime::animator::{Animator, Tick};
use runtime::clock::WallClock;
use runtime::notice::NoticeBoard;
use runtime::session::SessionGate;
use scene::boundary::BoundaryGeometry;
use scene::observer::ObservationWindow;
use scene::track::{TrackSet, TrackedObject};
use streaming::fetch::fetch_tracks;
use streaming::source::PositionSource;
use tracing::{debug, error, info};

use crate::clock::format_clock;

/// Projection scale that fills a 960x600 viewport with the world extent.
const PROJECTION_SCALE: f64 = 170.0;

const REJECTION_NOTICE: &str =
    "Please wait for the current animation to finish before selecting new objects.";

/// How a completed fetch was handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Animation state was created; the caller should drive ticks.
    Started,
    /// A run is already active; the selection was rejected outright and a
    /// notice posted. The active run is unaffected.
    Rejected,
    /// The joined fetch failed; nothing was started.
    FetchFailed,
}

struct ActiveRun<C> {
    animator: Animator<C>,
    tracks: TrackSet,
}

/// The map view: a static base surface painted once, a dynamic track
/// surface repainted by ticks, and the session gate serializing runs.
///
/// Everything here executes on one cooperative task; no two ticks ever
/// overlap and the gate is the only cross-cutting serialization point.
pub struct MapView<C> {
    clock: C,
    projection: Projection,
    canvas: MapCanvas,
    basemap: BasemapLayer,
    track_layer: TrackLayer,
    gate: SessionGate,
    notices: NoticeBoard,
    loading: bool,
    active: Option<ActiveRun<C>>,
}

impl<C: WallClock + Clone> MapView<C> {
    /// Builds the view and paints the base layer exactly once.
    pub fn new(clock: C, width: f64, height: f64, boundary: BoundaryGeometry) -> Self {
        let projection = Projection::fit(PROJECTION_SCALE, width, height);
        let basemap = BasemapLayer::new(1, boundary);
        let mut canvas = MapCanvas::new(width, height);
        basemap.render(&projection, canvas.base_mut());

        Self {
            clock,
            projection,
            canvas,
            basemap,
            track_layer: TrackLayer::new(2),
            gate: SessionGate::new(),
            notices: NoticeBoard::new(),
            loading: false,
            active: None,
        }
    }

    pub fn canvas(&self) -> &MapCanvas {
        &self.canvas
    }

    pub fn basemap(&self) -> &BasemapLayer {
        &self.basemap
    }

    /// Loading indicator for the surrounding UI; set for the duration of a
    /// fetch and cleared on both success and failure.
    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notices.current()
    }

    /// Selection change: join the per-object fetches, then try to start a
    /// run. The loading flag clears on both success and failure.
    pub async fn on_selection_changed(
        &mut self,
        source: &dyn PositionSource,
        objects: &[TrackedObject],
        window: ObservationWindow,
    ) -> SelectionOutcome {
        self.loading = true;
        let fetched = fetch_tracks(source, objects, window).await;
        self.loading = false;

        let tracks = match fetched {
            Ok(tracks) => tracks,
            Err(e) => {
                error!(error = %e, kind = ?e.kind, "position fetch failed; discarding batch");
                return SelectionOutcome::FetchFailed;
            }
        };

        if self.begin_animation(tracks) {
            SelectionOutcome::Started
        } else {
            SelectionOutcome::Rejected
        }
    }

    /// Gate check + animation state creation. Checked once per
    /// fetch-success event, never per tick.
    pub fn begin_animation(&mut self, tracks: TrackSet) -> bool {
        if !self.gate.try_start() {
            self.notices.post(REJECTION_NOTICE);
            return false;
        }

        let animator = Animator::start(self.clock.clone(), tracks.max_len());
        info!(
            objects = tracks.tracks.len(),
            max_len = tracks.max_len(),
            "animation started"
        );
        self.active = Some(ActiveRun { animator, tracks });
        true
    }

    /// One animation tick. Returns `false` once idle (including the tick
    /// that performed the terminal transition).
    pub fn tick(&mut self) -> bool {
        let Some(mut run) = self.active.take() else {
            return false;
        };

        match run.animator.tick() {
            Tick::Draw { index, sim_time } => {
                let label = format_clock(sim_time);
                self.track_layer
                    .render(&run.tracks, index, &label, &self.projection, &mut self.canvas);
                debug!(
                    index,
                    commands = self.canvas.track().commands().len(),
                    "dynamic layer repainted"
                );
                self.active = Some(run);
                true
            }
            Tick::Finished => {
                self.notices.clear();
                self.gate.finish();
                info!("animation finished");
                false
            }
        }
    }

    /// Drives ticks at the fixed real-time cadence until the run reaches
    /// its terminal transition.
    pub async fn run_animation(&mut self) {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(
            runtime::animator::TICK_INTERVAL_MS,
        ));
        while self.is_animating() {
            interval.tick().await;
            if !self.tick() {
                break;
            }
        }
    }
}
