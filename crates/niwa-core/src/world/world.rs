//! World - a grid plus the side state of its rule set

use crate::error::Result;
use crate::materials::Material;
use crate::simulation::RuleSet;
use crate::world::{Grid, SimStats, WorldRng};

/// The simulated world of one sandbox variant
pub struct World<S: RuleSet> {
    rules: S,
    grid: Grid<S::Material>,
    /// Rule-set side state (lifespans for the ecology variant)
    state: S::State,
    ticks: u64,
}

impl<S: RuleSet> World<S> {
    /// Build the initial grid for `rules`, sized from its grid config
    pub fn new<R: WorldRng + ?Sized>(rules: S, rng: &mut R) -> Self {
        let grid_config = rules.grid_config();
        let (rows, cols) = (grid_config.rows(), grid_config.cols());
        let grid = rules.initial_grid(rows, cols, rng);
        log::info!("Created {} world ({}x{} cells)", rules.name(), cols, rows);
        Self::from_parts(rules, grid, S::State::default())
    }

    /// Assemble a world from an existing grid and state
    ///
    /// The caller is responsible for the state matching the grid.
    pub fn from_parts(rules: S, grid: Grid<S::Material>, state: S::State) -> Self {
        Self {
            rules,
            grid,
            state,
            ticks: 0,
        }
    }

    pub fn rules(&self) -> &S {
        &self.rules
    }

    pub fn grid(&self) -> &Grid<S::Material> {
        &self.grid
    }

    pub fn state(&self) -> &S::State {
        &self.state
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn get(&self, x: i32, y: i32) -> Result<S::Material> {
        self.grid.get(x, y)
    }

    /// Paint a single cell
    ///
    /// Fails with `OutOfBounds` outside the grid and with `IllegalPlacement`
    /// when the rule set refuses the target cell. A failed placement leaves
    /// grid and state untouched.
    pub fn place(&mut self, x: i32, y: i32, material: S::Material) -> Result<()> {
        let current = self.grid.get(x, y)?;
        self.rules.check_placement(current, x, y, material)?;
        self.grid.set(x, y, material)?;
        self.rules
            .on_placed(&mut self.state, x as usize, y as usize, material);
        log::trace!("Placed {} at ({}, {})", material.name(), x, y);
        Ok(())
    }

    /// Advance one tick
    pub fn step<R: WorldRng + ?Sized>(&mut self, rng: &mut R, stats: &mut dyn SimStats) {
        self.rules
            .tick(&mut self.grid, &mut self.state, rng, stats);
        self.ticks += 1;
    }

    /// Rebuild the initial grid and clear side state and the tick counter
    pub fn reset<R: WorldRng + ?Sized>(&mut self, rng: &mut R) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = self.rules.initial_grid(rows, cols, rng);
        self.state = S::State::default();
        self.ticks = 0;
        log::info!("Reset {} world", self.rules.name());
    }

    /// Ticks since creation or the last reset
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn count(&self, material: S::Material) -> usize {
        self.grid.count(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EcologyConfig, GranularConfig, GridConfig};
    use crate::error::WorldError;
    use crate::materials::{EcologyMaterial, GranularMaterial};
    use crate::simulation::{EcologyRules, GranularRules};
    use crate::world::{IMMORTAL, LifespanMap, NoopStats};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn granular_world(rows: usize, cols: usize) -> World<GranularRules> {
        let config = GranularConfig {
            grid: GridConfig::cells(rows, cols),
            ..GranularConfig::default()
        };
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        World::new(GranularRules::new(config), &mut rng)
    }

    fn ecology_world(rows: &[Vec<EcologyMaterial>]) -> World<EcologyRules> {
        let grid = Grid::from_rows(rows).unwrap();
        World::from_parts(
            EcologyRules::new(EcologyConfig::default()),
            grid,
            LifespanMap::new(),
        )
    }

    #[test]
    fn test_new_uses_grid_config() {
        let world = granular_world(3, 4);
        assert_eq!(world.dimensions(), (3, 4));
        assert_eq!(world.grid().occupied(), 0);
        assert_eq!(world.tick_count(), 0);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut world = granular_world(3, 4);
        assert_eq!(
            world.place(4, 0, GranularMaterial::Sand),
            Err(WorldError::OutOfBounds {
                x: 4,
                y: 0,
                cols: 4,
                rows: 3
            })
        );
        assert!(world.place(0, -1, GranularMaterial::Sand).is_err());
        assert_eq!(world.grid().occupied(), 0);
    }

    #[test]
    fn test_granular_place_overwrites_anything() {
        let mut world = granular_world(2, 2);
        world.place(1, 1, GranularMaterial::Water).unwrap();
        world.place(1, 1, GranularMaterial::Grass).unwrap();
        assert_eq!(world.get(1, 1), Ok(GranularMaterial::Grass));
        world.place(1, 1, GranularMaterial::Empty).unwrap();
        assert_eq!(world.count(GranularMaterial::Grass), 0);
    }

    #[test]
    fn test_ecology_place_requires_soil() {
        use EcologyMaterial::*;
        let mut world = ecology_world(&[vec![Soil, Water]]);

        assert!(matches!(
            world.place(1, 0, PlantFast),
            Err(WorldError::IllegalPlacement { .. })
        ));
        assert_eq!(world.get(1, 0), Ok(Water));
        assert!(world.state().is_empty());

        world.place(0, 0, PlantFast).unwrap();
        assert_eq!(world.state().get(0, 0), Some(200));
    }

    #[test]
    fn test_ecology_place_parasite_and_seed() {
        use EcologyMaterial::*;
        let mut world = ecology_world(&[vec![Soil, Soil]]);
        world.place(0, 0, PlantParasitic).unwrap();
        world.place(1, 0, Seed).unwrap();
        assert_eq!(world.state().get(0, 0), Some(IMMORTAL));
        assert!(!world.state().contains(1, 0));
        assert!(world.state().is_consistent_with(world.grid()));
    }

    #[test]
    fn test_step_counts_ticks() {
        let mut world = granular_world(3, 1);
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        world.place(0, 0, GranularMaterial::Sand).unwrap();
        world.step(&mut rng, &mut NoopStats);
        world.step(&mut rng, &mut NoopStats);
        assert_eq!(world.tick_count(), 2);
        assert_eq!(world.get(0, 2), Ok(GranularMaterial::Sand));
    }

    #[test]
    fn test_reset() {
        let mut world = granular_world(3, 3);
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        world.place(1, 1, GranularMaterial::Sand).unwrap();
        world.step(&mut rng, &mut NoopStats);
        world.reset(&mut rng);
        assert_eq!(world.grid().occupied(), 0);
        assert_eq!(world.tick_count(), 0);
    }
}
