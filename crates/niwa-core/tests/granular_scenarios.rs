//! End-to-end scenarios for the granular/liquid rule set
//!
//! Each test builds a tiny hand-made grid, ticks it through a `Simulation`
//! and checks the exact resulting column.

use niwa_core::materials::GranularMaterial::{self, *};
use niwa_core::simulation::{GranularRules, Simulation};
use niwa_core::world::{Grid, World};

fn column(cells: &[GranularMaterial]) -> Simulation<GranularRules> {
    let rows: Vec<Vec<GranularMaterial>> = cells.iter().map(|&m| vec![m]).collect();
    let grid = Grid::from_rows(&rows).unwrap();
    Simulation::with_world(World::from_parts(GranularRules::default(), grid, ()), 42)
}

fn cells(sim: &Simulation<GranularRules>) -> Vec<GranularMaterial> {
    sim.world().grid().iter().map(|(_, _, m)| m).collect()
}

#[test]
fn test_sand_falls_one_row_per_tick() {
    let mut sim = column(&[Sand, Empty, Empty]);

    sim.tick();
    assert_eq!(cells(&sim), [Empty, Sand, Empty]);

    sim.tick();
    assert_eq!(cells(&sim), [Empty, Empty, Sand]);

    // Resting on the bottom row
    let stats = sim.tick();
    assert_eq!(cells(&sim), [Empty, Empty, Sand]);
    assert!(stats.is_idle());
}

#[test]
fn test_sand_sinks_in_water() {
    let mut sim = column(&[Sand, Water]);
    sim.tick();
    assert_eq!(cells(&sim), [Water, Sand]);
}

#[test]
fn test_water_soaks_into_dry_soil() {
    let mut sim = column(&[Water, SoilDry]);
    let stats = sim.tick();
    assert_eq!(cells(&sim), [Water, SoilWet]);
    assert_eq!(stats.state_changes, 1);
}

#[test]
fn test_each_grain_moves_once_per_pass() {
    let mut sim = column(&[Sand, Sand, Empty, Empty]);
    let stats = sim.tick();
    assert_eq!(cells(&sim), [Empty, Sand, Sand, Empty]);
    assert_eq!(stats.cells_moved, 2);
}

#[test]
fn test_seed_on_wet_soil_becomes_grass() {
    let mut sim = column(&[Seed, Empty, SoilWet]);
    sim.tick();
    assert_eq!(cells(&sim), [Empty, Seed, SoilWet]);
    sim.tick();
    assert_eq!(cells(&sim), [Empty, Grass, SoilWet]);

    // Grass is inert
    sim.tick();
    assert_eq!(cells(&sim), [Empty, Grass, SoilWet]);
}

#[test]
fn test_sand_slides_off_a_peak() {
    let grid = Grid::from_rows(&[
        vec![Empty, Sand, Empty],
        vec![Empty, Sand, Empty],
    ])
    .unwrap();
    let mut sim = Simulation::with_world(World::from_parts(GranularRules::default(), grid, ()), 1);
    sim.tick();
    assert_eq!(sim.world().get(0, 1), Ok(Sand));
    assert_eq!(sim.world().get(1, 0), Ok(Empty));
    assert_eq!(sim.world().count(Sand), 2);
}
