//! Grid - fixed-size 2D array of material cells

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, WorldError};
use crate::materials::Material;
use crate::world::WorldRng;

/// Orthogonal neighbor offsets in scan order: left, right, up, down
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular grid of cells
///
/// Row 0 is the top of the grid and "below" means `y + 1`. Coordinates are
/// never wrapped: anything outside `[0, cols) x [0, rows)` is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<M> {
    rows: usize,
    cols: usize,
    /// Cell data, row-major order
    /// Index = y * cols + x
    cells: Vec<M>,
}

impl<M: Material> Grid<M> {
    /// Create an all-empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, M::EMPTY)
    }

    /// Create a grid with every cell set to `material`
    pub fn filled(rows: usize, cols: usize, material: M) -> Self {
        Self {
            rows,
            cols,
            cells: vec![material; rows * cols],
        }
    }

    /// Create a grid where each cell independently becomes `hit` with
    /// probability `chance`, else `miss`
    pub fn randomized<R: WorldRng + ?Sized>(
        rows: usize,
        cols: usize,
        chance: f32,
        hit: M,
        miss: M,
        rng: &mut R,
    ) -> Self {
        let cells = (0..rows * cols)
            .map(|_| {
                if rng.check_probability(chance) {
                    hit
                } else {
                    miss
                }
            })
            .collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from rows of cells (top row first)
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<M>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the material at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<M> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Set the material at (x, y)
    pub fn set(&mut self, x: i32, y: i32, material: M) -> Result<()> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = material;
        Ok(())
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Material at in-bounds local coordinates
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> M {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[y * self.cols + x]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, material: M) {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[y * self.cols + x] = material;
    }

    /// Swap two in-bounds cells
    #[inline]
    pub(crate) fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = a.1 * self.cols + a.0;
        let ib = b.1 * self.cols + b.0;
        self.cells.swap(ia, ib);
    }

    /// Bounds-checked neighbor position
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        (nx < self.cols && ny < self.rows).then_some((nx, ny))
    }

    /// Material at a bounds-checked neighbor position
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<M> {
        self.offset(x, y, dx, dy).map(|(nx, ny)| self.at(nx, ny))
    }

    /// In-bounds orthogonal neighbors in order left, right, up, down
    pub fn orthogonal_neighbors(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 4]> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dx, dy)| self.offset(x, y, dx, dy))
            .collect()
    }

    /// Number of cells holding `material`
    pub fn count(&self, material: M) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Iterate cells as (x, y, material) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, M)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| (i % cols, i / cols, m))
    }

    /// One line of glyphs per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|m| m.glyph()));
            out.push('\n');
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> WorldError {
        WorldError::OutOfBounds {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{EcologyMaterial, GranularMaterial};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid<GranularMaterial> = Grid::new(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.count(GranularMaterial::Empty), 12);
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid: Grid<GranularMaterial> = Grid::new(3, 4);
        grid.set(3, 2, GranularMaterial::Sand).unwrap();
        assert_eq!(grid.get(3, 2), Ok(GranularMaterial::Sand));
        assert_eq!(grid.at(3, 2), GranularMaterial::Sand);
        assert_eq!(grid.get(0, 0), Ok(GranularMaterial::Empty));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut grid: Grid<GranularMaterial> = Grid::new(3, 4);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MAX, i32::MIN)] {
            assert!(matches!(
                grid.get(x, y),
                Err(WorldError::OutOfBounds { .. })
            ));
            assert!(grid.set(x, y, GranularMaterial::Sand).is_err());
        }
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_offset_never_wraps() {
        let grid: Grid<GranularMaterial> = Grid::new(2, 2);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(0, 0, 0, -1), None);
        assert_eq!(grid.offset(1, 1, 1, 0), None);
        assert_eq!(grid.offset(1, 1, 0, 1), None);
        assert_eq!(grid.offset(0, 0, 1, 1), Some((1, 1)));
    }

    #[test]
    fn test_orthogonal_neighbor_order() {
        let grid: Grid<GranularMaterial> = Grid::new(3, 3);
        let neighbors = grid.orthogonal_neighbors(1, 1);
        assert_eq!(neighbors.as_slice(), &[(0, 1), (2, 1), (1, 0), (1, 2)]);

        // Corner keeps only in-bounds neighbors, still in order
        let corner = grid.orthogonal_neighbors(0, 0);
        assert_eq!(corner.as_slice(), &[(1, 0), (0, 1)]);
    }

    #[test]
    fn test_from_rows() {
        use GranularMaterial::*;
        let grid = Grid::from_rows(&[vec![Sand, Empty], vec![Water, SoilDry]]).unwrap();
        assert_eq!(grid.get(0, 0), Ok(Sand));
        assert_eq!(grid.get(1, 1), Ok(SoilDry));
        assert!(Grid::from_rows(&[vec![Sand], vec![Water, Water]]).is_none());
    }

    #[test]
    fn test_randomized_fill_fraction() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let grid = Grid::randomized(
            100,
            100,
            0.2,
            EcologyMaterial::Water,
            EcologyMaterial::Soil,
            &mut rng,
        );
        let water = grid.count(EcologyMaterial::Water) as f32 / 10_000.0;
        assert!((water - 0.2).abs() < 0.02, "water fraction {water}");
        assert_eq!(
            grid.count(EcologyMaterial::Water) + grid.count(EcologyMaterial::Soil),
            10_000
        );
    }

    #[test]
    fn test_to_text() {
        use GranularMaterial::*;
        let grid = Grid::from_rows(&[vec![Sand, Empty], vec![Water, Grass]]).unwrap();
        assert_eq!(grid.to_text(), ": \n~w\n");
    }
}
