//! Lifespan map - remaining ticks for every living plant

use glam::IVec2;
use std::collections::HashMap;

use super::Grid;
use crate::materials::EcologyMaterial;

/// Lifespan value of plants that never age (parasites)
pub const IMMORTAL: i32 = -1;

/// Sparse map from cell coordinate to remaining ticks to live
///
/// Entries exist only for cells currently holding a plant: every fast/slow
/// plant has exactly one positive entry, parasites hold `IMMORTAL` or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifespanMap {
    entries: HashMap<IVec2, i32, ahash::RandomState>,
}

/// A cell whose lifespan entry disagrees with its material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifespanViolation {
    pub x: usize,
    pub y: usize,
    pub material: EcologyMaterial,
    pub lifespan: Option<i32>,
}

impl LifespanMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        self.entries.get(&key(x, y)).copied()
    }

    pub fn insert(&mut self, x: usize, y: usize, lifespan: i32) {
        self.entries.insert(key(x, y), lifespan);
    }

    pub fn remove(&mut self, x: usize, y: usize) -> Option<i32> {
        self.entries.remove(&key(x, y))
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.entries.contains_key(&key(x, y))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate (x, y, lifespan) in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.entries
            .iter()
            .map(|(pos, &ticks)| (pos.x as usize, pos.y as usize, ticks))
    }

    /// Cells where the map and the grid disagree
    pub fn violations(&self, grid: &Grid<EcologyMaterial>) -> Vec<LifespanViolation> {
        let mut violations: Vec<LifespanViolation> = grid
            .iter()
            .filter_map(|(x, y, material)| {
                let lifespan = self.get(x, y);
                let ok = match material {
                    EcologyMaterial::PlantFast | EcologyMaterial::PlantSlow => {
                        matches!(lifespan, Some(t) if t > 0)
                    }
                    EcologyMaterial::PlantParasitic => {
                        matches!(lifespan, None | Some(IMMORTAL))
                    }
                    _ => lifespan.is_none(),
                };
                (!ok).then_some(LifespanViolation {
                    x,
                    y,
                    material,
                    lifespan,
                })
            })
            .collect();

        // Entries pointing outside the grid can't be found by the scan above
        for (x, y, ticks) in self.iter() {
            if x >= grid.cols() || y >= grid.rows() {
                violations.push(LifespanViolation {
                    x,
                    y,
                    material: EcologyMaterial::Empty,
                    lifespan: Some(ticks),
                });
            }
        }

        violations
    }

    /// Whether every entry matches the grid
    pub fn is_consistent_with(&self, grid: &Grid<EcologyMaterial>) -> bool {
        self.violations(grid).is_empty()
    }
}

#[inline]
fn key(x: usize, y: usize) -> IVec2 {
    IVec2::new(x as i32, y as i32)
}
