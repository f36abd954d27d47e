use log::{debug, info};

use super::config::{MAX_SPEED, MIN_SPEED, PlayConfig};
use super::Renderer;
use crate::domain::Engine;
use crate::error::Result;

/// Simulation drives the engine in real time.
/// This is the application layer that paces generations and feeds the renderer.
pub struct Simulation {
    pub engine: Engine,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub random_density: f64,
}

impl Simulation {
    /// Create a paused simulation with an empty board
    pub fn new(config: &PlayConfig) -> Result<Self> {
        let engine = Engine::new(config.board_size)?;
        info!(
            "Board {}x{} at {} gen/s",
            config.board_size, config.board_size, config.updates_per_second
        );
        Ok(Self {
            engine,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second.clamp(MIN_SPEED, MAX_SPEED),
            random_density: config.random_density,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!("{}", if self.is_running { "running" } else { "paused" });
        self
    }

    /// Clear board and pause
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.is_running = false;
        self
    }

    /// Randomize board and pause
    pub fn randomize(mut self) -> Self {
        self.engine.randomize(self.random_density);
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Update simulation by one frame; steps at most one generation
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.updates_per_second {
            self.engine.step();
            self.update_timer = 0.0;
        }

        self
    }

    /// Hand the current board to a renderer
    pub fn show(&self, renderer: &mut dyn Renderer) {
        renderer.show(self.engine.snapshot(), self.engine.generation());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, catalog};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, usize)>,
    }

    impl Renderer for Recorder {
        fn show(&mut self, board: &Board, generation: u64) {
            self.frames.push((generation, board.population()));
        }
    }

    fn simulation() -> Simulation {
        let config = PlayConfig { board_size: 9, ..PlayConfig::default() };
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn test_invalid_board_size() {
        let config = PlayConfig { board_size: 0, ..PlayConfig::default() };
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let sim = simulation().tick(10.0);
        assert_eq!(sim.engine.generation(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = simulation().with_running(true);
        let sim = sim.tick(0.05);
        assert_eq!(sim.engine.generation(), 0);
        let sim = sim.tick(0.06);
        assert_eq!(sim.engine.generation(), 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = simulation().adjust_speed(-100.0);
        assert_eq!(sim.updates_per_second, MIN_SPEED);
        let sim = sim.adjust_speed(1000.0);
        assert_eq!(sim.updates_per_second, MAX_SPEED);
    }

    #[test]
    fn test_clear_pauses() {
        let mut sim = simulation().with_running(true);
        sim.engine.insert(catalog::blinker(), (4, 4)).unwrap();
        let sim = sim.clear();
        assert!(!sim.is_running);
        assert_eq!(sim.engine.population(), 0);
    }

    #[test]
    fn test_show_passes_snapshot() {
        let mut sim = simulation().with_running(true);
        sim.engine.insert(catalog::blinker(), (4, 4)).unwrap();
        let mut recorder = Recorder::default();
        sim.show(&mut recorder);
        let sim = sim.tick(1.0);
        sim.show(&mut recorder);
        assert_eq!(recorder.frames, vec![(0, 3), (1, 3)]);
    }
}
