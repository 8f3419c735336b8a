use foundation::time::Time;

use crate::clock::WallClock;

/// Samples consumed per tick: the shared index advances one minute of
/// ground track (60 one-second samples) per real second.
pub const INDEX_STEP: usize = 60;
/// Simulated seconds per elapsed wall-clock second, for the clock label.
pub const TIME_SCALE: f64 = 60.0;
/// Real-time tick cadence.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Mutable state of the single in-flight animation run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationState {
    pub current_index: usize,
    pub is_running: bool,
    pub start_wall_time: Time,
}

/// What one tick decided.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Tick {
    /// Redraw the dynamic layer at `index`, labelling the on-screen clock
    /// with `sim_time`.
    Draw { index: usize, sim_time: Time },
    /// Terminal transition: the index has walked past the longest track.
    Finished,
}

/// Fixed-cadence animation state machine: Idle -> Running -> Idle.
///
/// The tick source (a repeating interval) is owned by the driver; this type
/// only performs the per-tick state transition, so the terminal condition
/// and step size are testable without real waits. Tick bodies never overlap
/// because the driver is a single cooperative loop.
#[derive(Debug)]
pub struct Animator<C> {
    clock: C,
    max_len: usize,
    state: AnimationState,
}

impl<C: WallClock> Animator<C> {
    /// Idle -> Running: caller has a joined track set and holds the session
    /// gate. Records the start wall time and resets the shared index.
    pub fn start(clock: C, max_len: usize) -> Self {
        let start_wall_time = clock.now();
        Self {
            clock,
            max_len,
            state: AnimationState {
                current_index: 0,
                is_running: true,
                start_wall_time,
            },
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Advances the state machine by one tick.
    ///
    /// Returns `Tick::Finished` (and flips to Idle) once `current_index`
    /// reaches the longest sequence length; otherwise returns the index to
    /// draw and advances the index by [`INDEX_STEP`].
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_running || self.state.current_index >= self.max_len {
            self.state.is_running = false;
            return Tick::Finished;
        }

        // Elapsed time is pinned to zero on the very first tick so the clock
        // label starts exactly at the wall time the run began.
        let elapsed = if self.state.current_index == 0 {
            0.0
        } else {
            self.clock.now().seconds_since(self.state.start_wall_time)
        };
        let sim_time = self
            .state
            .start_wall_time
            .plus_seconds(TIME_SCALE * elapsed);

        let index = self.state.current_index;
        self.state.current_index += INDEX_STEP;
        Tick::Draw { index, sim_time }
    }
}

#[cfg(test)]
mod tests {
    use super::{Animator, INDEX_STEP, Tick};
    use crate::clock::ManualClock;
    use foundation::time::Time;

    #[test]
    fn draw_tick_count_is_len_over_step_rounded_up() {
        for (len, expected) in [(0usize, 0usize), (1, 1), (60, 1), (61, 2), (120, 2), (180, 3)] {
            let clock = ManualClock::starting_at(0.0);
            let mut animator = Animator::start(&clock, len);
            let mut draws = 0;
            loop {
                match animator.tick() {
                    Tick::Draw { .. } => draws += 1,
                    Tick::Finished => break,
                }
                clock.advance(1.0);
            }
            assert_eq!(draws, expected, "len {len}");
            assert!(animator.state().current_index >= len);
            assert!(!animator.is_running());
        }
    }

    #[test]
    fn uneven_tracks_draw_three_ticks_then_stop() {
        // Two tracks of length 120 and 180: indices 0, 60, 120 draw, then
        // the run is terminal.
        let clock = ManualClock::starting_at(1_000.0);
        let mut animator = Animator::start(&clock, 180);

        let mut indices = Vec::new();
        loop {
            match animator.tick() {
                Tick::Draw { index, .. } => indices.push(index),
                Tick::Finished => break,
            }
            clock.advance(1.0);
        }
        assert_eq!(indices, vec![0, 60, 120]);
        assert_eq!(animator.state().current_index, 180);
    }

    #[test]
    fn first_tick_clock_label_is_start_time() {
        let clock = ManualClock::starting_at(500.0);
        let mut animator = Animator::start(&clock, 120);
        // Even if the driver fires the first tick late, elapsed is zero.
        clock.advance(3.0);
        match animator.tick() {
            Tick::Draw { sim_time, .. } => assert_eq!(sim_time, Time(500.0)),
            Tick::Finished => panic!("expected a draw tick"),
        }
    }

    #[test]
    fn later_ticks_scale_elapsed_time_by_sixty() {
        let clock = ManualClock::starting_at(0.0);
        let mut animator = Animator::start(&clock, 180);
        let _ = animator.tick();
        clock.advance(2.0);
        match animator.tick() {
            Tick::Draw { index, sim_time } => {
                assert_eq!(index, INDEX_STEP);
                assert_eq!(sim_time, Time(120.0));
            }
            Tick::Finished => panic!("expected a draw tick"),
        }
    }

    #[test]
    fn ticking_after_finish_stays_finished() {
        let clock = ManualClock::starting_at(0.0);
        let mut animator = Animator::start(&clock, 1);
        let _ = animator.tick();
        assert_eq!(animator.tick(), Tick::Finished);
        assert_eq!(animator.tick(), Tick::Finished);
    }
}
