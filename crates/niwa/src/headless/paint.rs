//! `--paint` argument parsing

use anyhow::{Context, Result, anyhow, bail};
use std::str::FromStr;

use niwa_core::materials::Material;

/// One brush stroke: `<material>@<x>,<y>[r<radius>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintSpec {
    /// Material name, resolved against the chosen variant at run time
    pub material: String,
    pub x: i32,
    pub y: i32,
    /// Brush radius in cells (0 = single cell)
    pub radius: u32,
}

impl PaintSpec {
    /// Look up the material for a concrete variant
    pub fn resolve<M: Material>(&self) -> Result<M> {
        M::from_name(&self.material).ok_or_else(|| {
            let known: Vec<_> = M::ALL.iter().map(|m| m.name()).collect();
            anyhow!(
                "unknown material '{}' (expected one of: {})",
                self.material,
                known.join(", ")
            )
        })
    }
}

impl FromStr for PaintSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (material, position) = s
            .split_once('@')
            .with_context(|| format!("'{s}' is not <material>@<x>,<y>[r<radius>]"))?;
        if material.is_empty() {
            bail!("'{s}' has no material name");
        }

        let (coords, radius) = match position.split_once(['r', 'R']) {
            Some((coords, radius)) => (
                coords,
                radius
                    .parse()
                    .with_context(|| format!("bad brush radius '{radius}'"))?,
            ),
            None => (position, 0),
        };
        let (x, y) = coords
            .split_once(',')
            .with_context(|| format!("'{coords}' is not <x>,<y>"))?;

        Ok(Self {
            material: material.to_string(),
            x: x.trim().parse().with_context(|| format!("bad x '{x}'"))?,
            y: y.trim().parse().with_context(|| format!("bad y '{y}'"))?,
            radius,
        })
    }
}
