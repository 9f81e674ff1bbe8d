//! Tick scheduler - run/pause state, commands and the seeded RNG
//!
//! The scheduler never loops on its own. Callers decide the cadence and call
//! `advance` (respects pause) or `tick` (always steps) once per frame.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::Result;
use crate::materials::Material;
use crate::simulation::RuleSet;
use crate::world::{TickStats, World};

/// Control commands coming from an external input source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<M> {
    /// Resume ticking
    Start,
    /// Stop ticking, keep the world
    Pause,
    TogglePause,
    /// Advance exactly one tick on the next `advance`, even while paused
    Step,
    /// Pause and reset the world to its initial state
    Stop,
    /// Choose the material painted by `paint_selected`
    Select(M),
}

/// Drives a world one discrete step at a time
pub struct Simulation<S: RuleSet> {
    world: World<S>,
    rng: Xoshiro256StarStar,
    running: bool,
    step_pending: bool,
    selected: S::Material,
    last_tick: TickStats,
    totals: TickStats,
}

impl<S: RuleSet> Simulation<S> {
    /// Build a fresh world from `rules`, seeding all randomness from `seed`
    pub fn new(rules: S, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let world = World::new(rules, &mut rng);
        Self::from_parts(world, rng)
    }

    /// Drive an existing world (e.g. a hand-built scenario)
    pub fn with_world(world: World<S>, seed: u64) -> Self {
        Self::from_parts(world, Xoshiro256StarStar::seed_from_u64(seed))
    }

    fn from_parts(world: World<S>, rng: Xoshiro256StarStar) -> Self {
        let running = world.rules().starts_running();
        let selected = S::Material::ALL
            .iter()
            .copied()
            .find(|m| !m.is_empty())
            .unwrap_or(S::Material::EMPTY);
        Self {
            world,
            rng,
            running,
            step_pending: false,
            selected,
            last_tick: TickStats::default(),
            totals: TickStats::default(),
        }
    }

    pub fn apply(&mut self, command: Command<S::Material>) {
        match command {
            Command::Start => {
                self.running = true;
                log::info!("Simulation started");
            }
            Command::Pause => {
                self.running = false;
                log::info!("Simulation paused at tick {}", self.world.tick_count());
            }
            Command::TogglePause => {
                let next = if self.running {
                    Command::Pause
                } else {
                    Command::Start
                };
                self.apply(next);
            }
            Command::Step => self.step_pending = true,
            Command::Stop => {
                self.running = false;
                self.step_pending = false;
                self.world.reset(&mut self.rng);
                self.last_tick = TickStats::default();
                self.totals = TickStats::default();
            }
            Command::Select(material) => {
                self.selected = material;
                log::debug!("Selected {}", material.name());
            }
        }
    }

    /// Tick once if running or a single step was requested
    ///
    /// Returns whether a tick happened.
    pub fn advance(&mut self) -> bool {
        if !self.running && !self.step_pending {
            return false;
        }
        self.step_pending = false;
        self.tick();
        true
    }

    /// Tick once regardless of the pause state
    pub fn tick(&mut self) -> TickStats {
        let mut stats = TickStats::default();
        self.world.step(&mut self.rng, &mut stats);
        self.last_tick = stats;
        self.totals += stats;
        log::debug!(
            "Tick {}: {} moved, {} changed, {} grown",
            self.world.tick_count(),
            stats.cells_moved,
            stats.state_changes,
            stats.growth
        );
        stats
    }

    /// Paint interface pass-through
    pub fn place(&mut self, x: i32, y: i32, material: S::Material) -> Result<()> {
        self.world.place(x, y, material)
    }

    /// Paint the selected material at a cell
    pub fn paint_selected(&mut self, x: i32, y: i32) -> Result<()> {
        self.world.place(x, y, self.selected)
    }

    /// Paint the selected material under a viewport pixel
    pub fn paint_at_pixel(&mut self, px: i32, py: i32) -> Result<()> {
        let (x, y) = self.world.rules().grid_config().pixel_to_cell(px, py);
        self.paint_selected(x, y)
    }

    pub fn world(&self) -> &World<S> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World<S> {
        &mut self.world
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selected(&self) -> S::Material {
        self.selected
    }

    /// Stats of the most recent tick
    pub fn last_tick(&self) -> TickStats {
        self.last_tick
    }

    /// Stats accumulated since creation or the last stop
    pub fn totals(&self) -> TickStats {
        self.totals
    }
}
