use crate::error::{Error, Result};
use std::ops::Range;

/// Extent of the simulation grid. Cells on the outermost ring are the
/// boundary and are never touched by the step rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub nx: usize,
    pub ny: usize,
}

impl Domain {
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(Error::invalid_domain(
                nx,
                ny,
                "Grid dimensions must be positive",
            ));
        }
        Ok(Self { nx, ny })
    }

    pub fn size(&self) -> usize {
        self.nx * self.ny
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    // Empty when the grid is narrower than three cells on either axis.
    pub fn interior_x(&self) -> Range<usize> {
        1..self.nx.saturating_sub(1).max(1)
    }
    pub fn interior_y(&self) -> Range<usize> {
        1..self.ny.saturating_sub(1).max(1)
    }

    pub fn has_interior(&self) -> bool {
        self.nx >= 3 && self.ny >= 3
    }

    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.nx || y + 1 == self.ny
    }
}
