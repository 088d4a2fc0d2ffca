//! Static solidity lookup over the level's tile grid.
//!
//! Cells are stored in row-major order: index = ty * width + tx.
//! Queries outside the grid always report solid, so entities can never
//! resolve themselves off the edge of the map.

/// Boolean solidity field built once per level by the tilemap loader.
///
/// The simulation only reads from it; the single sanctioned mutation is
/// [`CollisionGrid::clear_tile`], used by the loader when it lifts
/// tile-encoded coins out of the foreground layer.
#[derive(Debug, Clone)]
pub struct CollisionGrid {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    cells: Vec<bool>,
}

impl CollisionGrid {
    /// Create a fully open grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    /// Create a grid from prebuilt row-major cells.
    ///
    /// `cells.len()` must equal `width * height`; the loader validates
    /// raw level data before calling this.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Whether the tile at (tx, ty) is solid. Out-of-bounds is always solid.
    pub fn solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 || tx >= self.width as i32 || ty >= self.height as i32 {
            return true;
        }
        self.cells[(ty as u32 * self.width + tx as u32) as usize]
    }

    /// Mark a tile solid. Loader/test helper.
    pub fn set_solid(&mut self, tx: u32, ty: u32) {
        if tx < self.width && ty < self.height {
            self.cells[(ty * self.width + tx) as usize] = true;
        }
    }

    /// Open a tile up. Loader-only: used when a tile-encoded collectible
    /// is converted into a live entity.
    pub fn clear_tile(&mut self, tx: u32, ty: u32) {
        if tx < self.width && ty < self.height {
            self.cells[(ty * self.width + tx) as usize] = false;
        }
    }

    /// Fill a horizontal run of solid tiles. Test/loader convenience.
    pub fn fill_row(&mut self, ty: u32, tx0: u32, tx1: u32) {
        for tx in tx0..=tx1.min(self.width.saturating_sub(1)) {
            self.set_solid(tx, ty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open() {
        let grid = CollisionGrid::new(4, 4);
        assert!(!grid.solid(0, 0));
        assert!(!grid.solid(3, 3));
    }

    #[test]
    fn out_of_bounds_is_solid() {
        let grid = CollisionGrid::new(4, 4);
        assert!(grid.solid(-1, 0));
        assert!(grid.solid(0, -1));
        assert!(grid.solid(4, 0));
        assert!(grid.solid(0, 4));
    }

    #[test]
    fn set_and_clear_tile() {
        let mut grid = CollisionGrid::new(4, 4);
        grid.set_solid(2, 1);
        assert!(grid.solid(2, 1));
        grid.clear_tile(2, 1);
        assert!(!grid.solid(2, 1));
    }

    #[test]
    fn from_cells_row_major() {
        let mut cells = vec![false; 6];
        cells[1 * 3 + 2] = true; // (2, 1) in a 3x2 grid
        let grid = CollisionGrid::from_cells(3, 2, cells);
        assert!(grid.solid(2, 1));
        assert!(!grid.solid(2, 0));
    }

    #[test]
    fn fill_row_clamps_to_width() {
        let mut grid = CollisionGrid::new(4, 2);
        grid.fill_row(1, 0, 10);
        for tx in 0..4 {
            assert!(grid.solid(tx, 1));
        }
    }
}
