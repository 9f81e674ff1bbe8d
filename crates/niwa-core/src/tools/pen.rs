//! Pen tool for drawing materials

use super::{Tool, draw_circle};
use crate::materials::Material;
use crate::simulation::RuleSet;
use crate::world::World;

/// Pen tool that draws a specific material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenTool<M> {
    material: M,
}

impl<M: Material> PenTool<M> {
    pub fn new(material: M) -> Self {
        Self { material }
    }

    /// Set the material this pen draws
    pub fn set_material(&mut self, material: M) {
        self.material = material;
    }

    pub fn material(&self) -> M {
        self.material
    }
}

impl<S: RuleSet> Tool<S> for PenTool<S::Material> {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, world: &mut World<S>, x: i32, y: i32, brush_size: u32) -> usize {
        draw_circle(world, x, y, brush_size, self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcologyConfig;
    use crate::materials::EcologyMaterial::{self, *};
    use crate::simulation::EcologyRules;
    use crate::world::{Grid, LifespanMap};

    #[test]
    fn test_pen_skips_illegal_cells() {
        let grid = Grid::from_rows(&[vec![Soil, Water, Soil], vec![Soil, Soil, Soil]]).unwrap();
        let mut world = crate::world::World::from_parts(
            EcologyRules::new(EcologyConfig::default()),
            grid,
            LifespanMap::new(),
        );

        let mut pen = PenTool::new(PlantSlow);
        assert_eq!(Tool::<EcologyRules>::name(&pen), "Pen");
        assert_eq!(pen.apply(&mut world, 1, 0, 1), 3);
        assert_eq!(world.get(1, 0), Ok(Water));
        assert_eq!(world.count(PlantSlow), 3);
        assert_eq!(world.state().len(), 3);

        pen.set_material(EcologyMaterial::Seed);
        assert_eq!(pen.material(), Seed);
        assert_eq!(pen.apply(&mut world, 0, 1, 0), 1);
        assert!(world.state().is_consistent_with(world.grid()));
    }
}
