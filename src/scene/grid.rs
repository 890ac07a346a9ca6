//! Dense 2D lattice of particle-type cells.
use crate::error::{Error, Result};
use crate::scene::ParticleType;

/// Row-major dense grid of [`ParticleType`] cells.
///
/// Cell `(x, y)` stands for the continuous position `(x * dx, y * dx)`; the
/// grid itself is unit-free and only the owning scene knows `dx`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<ParticleType>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![ParticleType::None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reallocate to the new dimensions.
    ///
    /// Cells in the overlapping region keep their values; everything else
    /// starts out as [`ParticleType::None`]. Each output cell is written
    /// exactly once, so there is no ordering requirement on the copy.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let mut cells = vec![ParticleType::None; new_width * new_height];
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                cells[y * new_width + x] = self.cells[y * self.width + x];
            }
        }
        self.cells = cells;
        self.width = new_width;
        self.height = new_height;
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: i64, y: i64) -> Result<ParticleType> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn set(&mut self, x: i64, y: i64, ty: ParticleType) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = ty;
        Ok(())
    }

    /// Reset every cell to [`ParticleType::None`].
    pub fn clear(&mut self) {
        self.cells.fill(ParticleType::None);
    }

    /// Cell indices holding `ty`, x-major with y innermost.
    ///
    /// This traversal order is part of the persistence format: particle lists
    /// in saved documents are emitted column by column.
    pub fn cells_of(&self, ty: ParticleType) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width)
            .flat_map(move |x| (0..self.height).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.cells[y * self.width + x] == ty)
    }

    pub fn is_empty_of_particles(&self) -> bool {
        self.cells.iter().all(|&c| c == ParticleType::None)
    }
}
