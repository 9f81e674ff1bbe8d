//! Paint tools built on the world's paint interface

mod pen;

pub use pen::PenTool;

use crate::simulation::RuleSet;
use crate::world::World;

/// Trait for drawing tools
pub trait Tool<S: RuleSet> {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool at a cell with the given brush radius
    ///
    /// Returns the number of cells actually painted.
    fn apply(&self, world: &mut World<S>, x: i32, y: i32, brush_size: u32) -> usize;
}

/// Paint a filled circle of cells
///
/// Cells outside the grid or refused by the rule set are skipped.
pub fn draw_circle<S: RuleSet>(
    world: &mut World<S>,
    center_x: i32,
    center_y: i32,
    radius: u32,
    material: S::Material,
) -> usize {
    let r = radius as i32;
    let mut painted = 0;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r
                && world.place(center_x + dx, center_y + dy, material).is_ok()
            {
                painted += 1;
            }
        }
    }
    painted
}
