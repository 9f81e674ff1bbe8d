//! Tick loop for headless runs

use anyhow::Result;
use std::io::Write;

use niwa_core::materials::Material;
use niwa_core::simulation::{Command, RuleSet, Simulation};
use niwa_core::tools::{PenTool, Tool};
use niwa_core::world::TickStats;

use super::{PaintSpec, write_census, write_dump};

/// What a headless run does after building the world
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub seed: u64,
    pub ticks: u64,
    /// Brush strokes applied before the first tick, in order
    pub paints: Vec<PaintSpec>,
    /// Dump the grid every n ticks (the final grid is always dumped)
    pub dump_every: Option<u64>,
    /// Run even if the rule set starts paused
    pub start: bool,
}

/// Run one simulation to completion, writing dumps and a census to `out`
///
/// Returns the stats accumulated over all ticks.
pub fn run<S: RuleSet>(rules: S, options: &RunOptions, out: &mut impl Write) -> Result<TickStats> {
    let mut sim = Simulation::new(rules, options.seed);

    for spec in &options.paints {
        let material: S::Material = spec.resolve()?;
        sim.apply(Command::Select(material));
        let pen = PenTool::new(sim.selected());
        let painted = pen.apply(sim.world_mut(), spec.x, spec.y, spec.radius);
        if painted == 0 {
            log::warn!(
                "{} at ({}, {}) r{} painted nothing",
                material.name(),
                spec.x,
                spec.y,
                spec.radius
            );
        } else {
            log::debug!("Painted {} cells of {}", painted, material.name());
        }
    }

    if options.start {
        sim.apply(Command::Start);
    }
    if !sim.is_running() && options.ticks > 0 {
        log::warn!(
            "{} starts paused, nothing will tick (pass --start)",
            sim.world().rules().name()
        );
    }

    for tick in 1..=options.ticks {
        if !sim.advance() {
            break;
        }
        if let Some(every) = options.dump_every
            && every > 0
            && tick % every == 0
            && tick != options.ticks
        {
            write_dump(out, &format!("tick {tick}"), sim.world().grid())?;
        }
    }

    let totals = sim.totals();
    log::info!(
        "Finished {} ticks: {} moved, {} changed, {} grown",
        sim.world().tick_count(),
        totals.cells_moved,
        totals.state_changes,
        totals.growth
    );

    write_dump(
        out,
        &format!("tick {}", sim.world().tick_count()),
        sim.world().grid(),
    )?;
    write_census(out, sim.world().grid())?;
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use niwa_core::config::{EcologyConfig, GranularConfig, GridConfig};
    use niwa_core::simulation::{EcologyRules, GranularRules};

    fn granular(rows: usize, cols: usize) -> GranularRules {
        GranularRules::new(GranularConfig {
            grid: GridConfig::cells(rows, cols),
            ..GranularConfig::default()
        })
    }

    #[test]
    fn test_sand_run_output() {
        let options = RunOptions {
            ticks: 5,
            paints: vec!["sand@0,0".parse().unwrap()],
            ..RunOptions::default()
        };
        let mut out = Vec::new();
        let totals = run(granular(3, 1), &options, &mut out).unwrap();
        assert_eq!(totals.cells_moved, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("tick 5\n+-+\n| |\n| |\n|:|\n+-+\n"));
        assert!(text.contains("sand"));
    }

    #[test]
    fn test_dump_every() {
        let options = RunOptions {
            ticks: 4,
            dump_every: Some(2),
            ..RunOptions::default()
        };
        let mut out = Vec::new();
        run(granular(2, 2), &options, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("tick 2\n"));
        assert_eq!(text.matches("tick 4\n").count(), 1);
    }

    #[test]
    fn test_unknown_material_fails() {
        let options = RunOptions {
            paints: vec!["lava@0,0".parse().unwrap()],
            ..RunOptions::default()
        };
        assert!(run(granular(2, 2), &options, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_ecology_needs_start() {
        let rules = || {
            EcologyRules::new(EcologyConfig {
                grid: GridConfig::cells(6, 6),
                ..EcologyConfig::default()
            })
        };
        let mut options = RunOptions {
            ticks: 3,
            ..RunOptions::default()
        };
        let mut out = Vec::new();
        run(rules(), &options, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("tick 0\n"));

        options.start = true;
        let mut out = Vec::new();
        run(rules(), &options, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("tick 3\n"));
    }
}
