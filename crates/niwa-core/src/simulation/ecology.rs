//! Plant ecology rules - growth, death, spread and parasitism
//!
//! Unlike the granular rules these are fully double-buffered: every decision
//! in a tick reads the pre-tick snapshot of grid and lifespans, and writes go
//! to a fresh copy that replaces the snapshot once the tick is complete.
//! Write conflicts are resolved in two phases:
//! 1. own-cell transitions (aging, death, germination) and spread into soil,
//!    where a soil cell is taken by the first claimant in row-major order
//! 2. parasite feeding, which overrides whatever the prey did in phase 1

use crate::config::{EcologyConfig, GridConfig, PlantParams};
use crate::error::{Result, WorldError};
use crate::materials::{EcologyMaterial, Material};
use crate::simulation::RuleSet;
use crate::world::{Grid, IMMORTAL, LifespanMap, SimStats, WorldRng};

use EcologyMaterial::*;

/// Plant ecology rule set
#[derive(Debug, Clone, Default)]
pub struct EcologyRules {
    config: EcologyConfig,
}

impl EcologyRules {
    pub fn new(config: EcologyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EcologyConfig {
        &self.config
    }

    /// Lifespan a freshly created cell of `material` starts with
    pub fn lifespan_of(&self, material: EcologyMaterial) -> Option<i32> {
        match material {
            PlantParasitic => Some(IMMORTAL),
            other => self.plant_params(other).map(|p| p.lifespan),
        }
    }

    fn plant_params(&self, material: EcologyMaterial) -> Option<PlantParams> {
        match material {
            PlantFast => Some(self.config.fast),
            PlantSlow => Some(self.config.slow),
            _ => None,
        }
    }

    /// Compute the next generation from a snapshot
    ///
    /// Pure with respect to its inputs: the result depends only on the
    /// snapshot and the values drawn from `rng`.
    pub fn step<R: WorldRng + ?Sized>(
        &self,
        snapshot: &Grid<EcologyMaterial>,
        lifespans: &LifespanMap,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> (Grid<EcologyMaterial>, LifespanMap) {
        let mut next = snapshot.clone();
        let mut next_lifespans = lifespans.clone();

        for (x, y, material) in snapshot.iter() {
            match material {
                PlantFast | PlantSlow => self.update_plant(
                    snapshot,
                    lifespans,
                    (&mut next, &mut next_lifespans),
                    (x, y),
                    rng,
                    stats,
                ),
                Seed => self.update_seed(&mut next, &mut next_lifespans, (x, y), rng, stats),
                _ => {}
            }
        }

        for (x, y, material) in snapshot.iter() {
            if material == PlantParasitic {
                Self::update_parasite(snapshot, &mut next, &mut next_lifespans, (x, y), stats);
            }
        }

        debug_assert!(
            next_lifespans.is_consistent_with(&next),
            "lifespan map out of sync: {:?}",
            next_lifespans.violations(&next)
        );

        (next, next_lifespans)
    }

    /// Age a mortal plant; it dies into seed/soil or spreads into neighboring soil
    fn update_plant<R: WorldRng + ?Sized>(
        &self,
        snapshot: &Grid<EcologyMaterial>,
        lifespans: &LifespanMap,
        (next, next_lifespans): (&mut Grid<EcologyMaterial>, &mut LifespanMap),
        (x, y): (usize, usize),
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let plant = snapshot.at(x, y);
        let Some(params) = self.plant_params(plant) else {
            return;
        };
        let remaining = lifespans.get(x, y).unwrap_or_else(|| {
            log::warn!("{} at ({}, {}) has no lifespan entry", plant.name(), x, y);
            params.lifespan
        }) - 1;
        if remaining <= 0 {
            let remains = if rng.check_probability(self.config.death_seed_chance) {
                Seed
            } else {
                Soil
            };
            next.put(x, y, remains);
            next_lifespans.remove(x, y);
            stats.record_state_change();
            return;
        }
        next_lifespans.insert(x, y, remaining);

        for (nx, ny) in snapshot.orthogonal_neighbors(x, y) {
            if snapshot.at(nx, ny) != Soil || !rng.check_probability(params.spread_chance) {
                continue;
            }
            // Another plant may have claimed this soil earlier in the tick
            if next.at(nx, ny) == Soil {
                next.put(nx, ny, plant);
                next_lifespans.insert(nx, ny, params.lifespan);
                stats.record_growth();
            }
        }
    }

    /// Seeds germinate into a fast or slow plant with equal odds
    fn update_seed<R: WorldRng + ?Sized>(
        &self,
        next: &mut Grid<EcologyMaterial>,
        next_lifespans: &mut LifespanMap,
        (x, y): (usize, usize),
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if !rng.check_probability(self.config.germination_chance) {
            return;
        }
        let plant = if rng.gen_bool() { PlantFast } else { PlantSlow };
        let params = if plant == PlantFast {
            self.config.fast
        } else {
            self.config.slow
        };
        next.put(x, y, plant);
        next_lifespans.insert(x, y, params.lifespan);
        stats.record_state_change();
    }

    /// Parasites consume the first mortal plant next to them or starve into soil
    fn update_parasite(
        snapshot: &Grid<EcologyMaterial>,
        next: &mut Grid<EcologyMaterial>,
        next_lifespans: &mut LifespanMap,
        (x, y): (usize, usize),
        stats: &mut dyn SimStats,
    ) {
        let prey = snapshot
            .orthogonal_neighbors(x, y)
            .into_iter()
            .find(|&(nx, ny)| snapshot.at(nx, ny).is_mortal_plant());

        match prey {
            Some((nx, ny)) => {
                next.put(nx, ny, PlantParasitic);
                next_lifespans.insert(nx, ny, IMMORTAL);
                stats.record_growth();
            }
            None => {
                next.put(x, y, Soil);
                next_lifespans.remove(x, y);
                stats.record_state_change();
            }
        }
    }
}

impl RuleSet for EcologyRules {
    type Material = EcologyMaterial;
    type State = LifespanMap;

    fn name(&self) -> &'static str {
        "ecology"
    }

    fn grid_config(&self) -> GridConfig {
        self.config.grid
    }

    fn starts_running(&self) -> bool {
        false
    }

    fn initial_grid<R: WorldRng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Grid<EcologyMaterial> {
        Grid::randomized(
            rows,
            cols,
            self.config.initial_water_fraction,
            Water,
            Soil,
            rng,
        )
    }

    fn tick<R: WorldRng + ?Sized>(
        &self,
        grid: &mut Grid<EcologyMaterial>,
        state: &mut LifespanMap,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let (next, next_lifespans) = self.step(grid, state, rng, stats);
        *grid = next;
        *state = next_lifespans;
    }

    fn check_placement(
        &self,
        current: EcologyMaterial,
        x: i32,
        y: i32,
        material: EcologyMaterial,
    ) -> Result<()> {
        if current == Soil {
            Ok(())
        } else {
            Err(WorldError::IllegalPlacement {
                x,
                y,
                material: material.name(),
                found: current.name(),
            })
        }
    }

    fn on_placed(&self, state: &mut LifespanMap, x: usize, y: usize, material: EcologyMaterial) {
        match self.lifespan_of(material) {
            Some(ticks) => state.insert(x, y, ticks),
            None => {
                state.remove(x, y);
            }
        }
    }
}
