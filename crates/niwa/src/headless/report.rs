//! Text output: grid dumps and material census

use std::io::{self, Write};

use niwa_core::materials::Material;
use niwa_core::world::Grid;

/// Cell count per material, in declaration order, skipping absent ones
pub fn census<M: Material>(grid: &Grid<M>) -> Vec<(M, usize)> {
    M::ALL
        .iter()
        .map(|&m| (m, grid.count(m)))
        .filter(|&(_, n)| n > 0)
        .collect()
}

/// Write the grid as glyphs framed by a border
pub fn write_dump<M: Material>(out: &mut impl Write, label: &str, grid: &Grid<M>) -> io::Result<()> {
    let border = format!("+{}+", "-".repeat(grid.cols()));
    writeln!(out, "{label}")?;
    writeln!(out, "{border}")?;
    for line in grid.to_text().lines() {
        writeln!(out, "|{line}|")?;
    }
    writeln!(out, "{border}")
}

pub fn write_census<M: Material>(out: &mut impl Write, grid: &Grid<M>) -> io::Result<()> {
    let total = (grid.rows() * grid.cols()).max(1) as f64;
    for (material, count) in census(grid) {
        writeln!(
            out,
            "{:>14} {:>7} {:>6.2}%",
            material.name(),
            count,
            100.0 * count as f64 / total
        )?;
    }
    Ok(())
}
