//! Session lifecycle: the tick schedule and input queue as owned,
//! scoped resources.
//!
//! A [`Session`] ties an [`Engine`] to the two stimuli that drive it: a
//! fixed-interval [`TickClock`] and a queue of key events. Both belong
//! to the session, not to any rendering framework: the clock is armed
//! when the session starts, re-armed on restart (after cancelling the
//! prior schedule), disarmed when a run ends, and everything is released
//! when the session drops. The host calls [`Session::pump`] from its
//! event loop; nothing here spawns threads or timers.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::{Direction, GameConfig};
use crate::engine::{Engine, Key, TickOutcome};

/// If the host stalls, run at most this many catch-up ticks per pump
/// before dropping the backlog.
const MAX_CATCH_UP: u32 = 8;

/// Fixed-interval tick schedule.
///
/// Purely passive: the owner polls it with the current time and gets
/// back how many ticks have come due. Disarmed clocks report zero.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: Duration,
    next_due: Option<Instant>,
}

impl TickClock {
    /// A disarmed clock with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Tick period must be non-zero");
        Self {
            period,
            next_due: None,
        }
    }

    /// Schedule the first tick one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Drop the schedule. Subsequent polls report zero until re-armed.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// Capped at [`MAX_CATCH_UP`]; beyond that the backlog is dropped
    /// and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut count = 0;
        while now >= due && count < MAX_CATCH_UP {
            count += 1;
            due += self.period;
        }
        if count == MAX_CATCH_UP && now >= due {
            due = now + self.period;
        }

        self.next_due = Some(due);
        count
    }
}

/// An engine bound to its clock and input queue.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    clock: TickClock,
    inputs: VecDeque<Key>,
}

impl Session {
    /// Start a session: fresh engine, clock armed at `now`.
    #[must_use]
    pub fn start(config: GameConfig, seed: u64, now: Instant) -> Self {
        Self::with_engine(Engine::new(config, seed), now)
    }

    /// Start a session around an existing engine.
    #[must_use]
    pub fn with_engine(engine: Engine, now: Instant) -> Self {
        let mut clock = TickClock::new(engine.config().tick_interval);
        clock.arm(now);
        Self {
            engine,
            clock,
            inputs: VecDeque::new(),
        }
    }

    /// Queue a key event. Applied on the next pump, before any due tick.
    pub fn push_key(&mut self, key: Key) {
        self.inputs.push_back(key);
    }

    /// Drain queued input and run every tick due at `now`.
    ///
    /// Input is applied first, so the latest valid direction request
    /// before a tick takes effect. When a tick ends the run, the clock
    /// is cancelled and the remaining backlog is discarded.
    pub fn pump(&mut self, now: Instant) -> Vec<TickOutcome> {
        while let Some(key) = self.inputs.pop_front() {
            self.engine.handle_key(key);
        }

        let due = self.clock.poll(now);
        let mut outcomes = Vec::with_capacity(due as usize);
        for _ in 0..due {
            let outcome = self.engine.tick();
            outcomes.push(outcome);
            if matches!(outcome, TickOutcome::Fatal(_)) {
                self.clock.cancel();
                break;
            }
        }
        outcomes
    }

    /// Restart the run: prior schedule cancelled, queue cleared, engine
    /// reset, clock re-armed at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.clock.cancel();
        self.inputs.clear();
        self.engine.restart();
        self.clock.arm(now);
    }

    /// Submit the finished run's score, then restart the session.
    ///
    /// No-op (returns false) while the run is still going or for a blank
    /// name, mirroring [`Engine::submit_score`].
    pub fn submit_score(&mut self, name: &str, now: Instant) -> bool {
        if self.engine.submit_score(name) {
            self.clock.cancel();
            self.inputs.clear();
            self.clock.arm(now);
            true
        } else {
            false
        }
    }

    /// Direct direction request, bypassing the key queue.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.engine.set_direction(direction)
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }
}
