//! Simulation - run/pause state and queued edits around an [`Engine`].

use std::collections::VecDeque;

use log::{debug, warn};

use crate::compute::{Engine, GenerationStats, GridError};
use crate::schema::{ConfigError, SimulationConfig};

use super::{Edit, TickRate};

/// Outcome of a single [`Simulation::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Whether a generation was advanced.
    pub advanced: bool,
    /// Queued edits applied after the advance.
    pub applied: usize,
    /// Queued edits dropped because they were out of range.
    pub rejected: usize,
}

/// Frontend-facing simulation controller.
///
/// Starts paused. Each [`tick`](Self::tick) advances one generation if
/// running and then applies queued edits in order, so edits never race
/// with an in-flight generation.
pub struct Simulation {
    engine: Engine,
    running: bool,
    tick_rate: TickRate,
    pending: VecDeque<Edit>,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(
            Engine::new(config)?,
            TickRate::new(config.tick_rate),
        ))
    }

    pub fn from_engine(engine: Engine, tick_rate: TickRate) -> Self {
        Self {
            engine,
            running: false,
            tick_rate,
            pending: VecDeque::new(),
        }
    }

    /// Engine reference, for snapshots and direct reads.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip between running and paused. Returns the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        debug!("Simulation {}", if self.running { "running" } else { "paused" });
        self.running
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn tick_rate_mut(&mut self) -> &mut TickRate {
        &mut self.tick_rate
    }

    /// Queue an edit for the end of the next tick.
    pub fn queue(&mut self, edit: Edit) {
        self.pending.push_back(edit);
    }

    /// Number of edits waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply an edit immediately.
    pub fn apply_now(&self, edit: Edit) -> Result<(), GridError> {
        edit.apply(&self.engine)
    }

    /// Advance one generation if running, then apply queued edits.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        if self.running {
            self.engine.advance();
            report.advanced = true;
        }

        for edit in self.pending.drain(..) {
            match edit.apply(&self.engine) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    warn!("Dropped edit {:?}: {}", edit, e);
                    report.rejected += 1;
                }
            }
        }

        report
    }

    pub fn stats(&self) -> GenerationStats {
        self.engine.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Pattern, Seed};

    fn simulation(pattern: Pattern) -> Simulation {
        Simulation::new(&SimulationConfig {
            rows: 8,
            cols: 8,
            tick_rate: 30,
            seed: Seed { pattern },
            ..SimulationConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_starts_paused() {
        let mut sim = simulation(Pattern::Blinker { row: 3, col: 2 });
        assert!(!sim.is_running());
        assert_eq!(sim.tick_rate().per_second(), 30);

        let report = sim.tick();
        assert!(!report.advanced);
        assert_eq!(sim.engine().generation(), 0);
    }

    #[test]
    fn test_toggle_and_tick() {
        let mut sim = simulation(Pattern::Blinker { row: 3, col: 2 });
        assert!(sim.toggle_running());
        assert!(sim.tick().advanced);
        assert_eq!(sim.engine().generation(), 1);

        assert!(!sim.toggle_running());
        sim.tick();
        assert_eq!(sim.engine().generation(), 1);
    }

    #[test]
    fn test_queued_edits_apply_after_advance() {
        let mut sim = simulation(Pattern::Empty);
        sim.set_running(true);

        // A lone cell would die if it were present during the advance.
        sim.queue(Edit::Set { row: 4, col: 4 });
        sim.queue(Edit::Set { row: 8, col: 0 });
        assert_eq!(sim.pending(), 2);

        let report = sim.tick();
        assert_eq!(
            report,
            TickReport {
                advanced: true,
                applied: 1,
                rejected: 1
            }
        );
        assert_eq!(sim.pending(), 0);
        assert!(sim.engine().get(4, 4).unwrap());

        sim.tick();
        assert!(!sim.engine().get(4, 4).unwrap());
    }

    #[test]
    fn test_edits_apply_in_order() {
        let mut sim = simulation(Pattern::Empty);
        sim.queue(Edit::Set { row: 1, col: 1 });
        sim.queue(Edit::ClearAll);
        sim.queue(Edit::Set { row: 2, col: 2 });
        sim.tick();

        let alive: Vec<_> = sim.engine().snapshot().alive_cells().collect();
        assert_eq!(alive, vec![(2, 2)]);
    }

    #[test]
    fn test_apply_now() {
        let sim = simulation(Pattern::Empty);
        sim.apply_now(Edit::Set { row: 0, col: 0 }).unwrap();
        assert_eq!(sim.stats().alive, 1);
        assert!(sim.apply_now(Edit::Unset { row: 0, col: 8 }).is_err());
    }

    #[test]
    fn test_tick_rate_adjust() {
        let mut sim = simulation(Pattern::Empty);
        sim.tick_rate_mut().increase();
        assert_eq!(sim.tick_rate().per_second(), 40);
    }
}
