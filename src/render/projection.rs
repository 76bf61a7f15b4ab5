//! Flattening of the cubic volume onto the three axis planes

use crate::game::{Cell, GameSession};

/// What a projected grid square shows; later variants win
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mark {
    Empty,
    Coin,
    Body,
    Head,
}

/// Viewing plane of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Looking down the Y axis: X to the right, +Z towards the viewer
    Top,
    /// Looking down the Z axis: X to the right, Y up
    Front,
    /// Looking down the X axis: -Z to the right, Y up
    Side,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Top, Plane::Front, Plane::Side];

    pub fn title(self) -> &'static str {
        match self {
            Plane::Top => " Top (X/Z) ",
            Plane::Front => " Front (X/Y) ",
            Plane::Side => " Side (Z/Y) ",
        }
    }

    /// (column, row) of `cell` in a grid of side `2 * half_extent + 1`
    pub fn project(self, cell: Cell, half_extent: i32) -> (i32, i32) {
        match self {
            Plane::Top => (cell.x + half_extent, cell.z + half_extent),
            Plane::Front => (cell.x + half_extent, half_extent - cell.y),
            Plane::Side => (half_extent - cell.z, half_extent - cell.y),
        }
    }
}

/// A square grid of marks for one plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub plane: Plane,
    pub side: usize,
    rows: Vec<Vec<Mark>>,
}

impl Projection {
    pub fn of_session(session: &GameSession, plane: Plane) -> Self {
        let half_extent = session.config().half_extent;
        let mut projection = Self::empty(plane, half_extent);

        projection.paint(session.coins().iter(), Mark::Coin, half_extent);
        projection.paint(session.snake().iter().skip(1), Mark::Body, half_extent);
        projection.paint(std::iter::once(session.snake().head()), Mark::Head, half_extent);

        projection
    }

    fn empty(plane: Plane, half_extent: i32) -> Self {
        let side = (half_extent * 2 + 1).max(0) as usize;
        Self {
            plane,
            side,
            rows: vec![vec![Mark::Empty; side]; side],
        }
    }

    fn paint(&mut self, cells: impl Iterator<Item = Cell>, mark: Mark, half_extent: i32) {
        for cell in cells {
            let (col, row) = self.plane.project(cell, half_extent);
            // The head may already be outside the volume on the fatal tick
            let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
                continue;
            };
            if let Some(square) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
                *square = (*square).max(mark);
            }
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Mark {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Mark::Empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
