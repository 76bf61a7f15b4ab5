use std::collections::VecDeque;

use super::direction::Direction;

/// A cell of the 3D game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        self.moved_by(dx, dy, dz)
    }

    /// True if every coordinate lies in `-half_extent..=half_extent`
    pub fn is_within(&self, half_extent: i32) -> bool {
        let range = -half_extent..=half_extent;
        range.contains(&self.x) && range.contains(&self.y) && range.contains(&self.z)
    }
}

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the play volume
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// The snake: an ordered run of cells with the head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeBody {
    segments: VecDeque<Cell>,
    direction: Direction,
    prev_direction: Direction,
    pending_growth: usize,
}

impl SnakeBody {
    /// Create a snake whose body trails behind `head`, opposite to `direction`.
    /// A `length` of 0 still yields the head.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut segments = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        segments.push_back(cell);
        for _ in 1..length {
            cell = cell.moved_in_direction(back);
            segments.push_back(cell);
        }

        Self {
            segments,
            direction,
            prev_direction: direction,
            pending_growth: 0,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        Self {
            segments,
            direction,
            prev_direction: direction,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Requested direction for the next advance
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction actually used by the last advance
    pub fn prev_direction(&self) -> Direction {
        self.prev_direction
    }

    /// Request a direction; a reversal is corrected when the snake next advances
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Direction the next advance will use
    pub fn effective_direction(&self) -> Direction {
        if self.direction.is_opposite(self.prev_direction) {
            self.prev_direction
        } else {
            self.direction
        }
    }

    /// Schedule one extra segment, added by the next advance
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    /// Move the head one cell along the effective direction, dragging the body
    pub fn advance(&mut self) {
        let direction = self.effective_direction();
        self.direction = direction;
        self.prev_direction = direction;

        let new_head = self.head().moved_in_direction(direction);
        self.segments.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.segments.pop_back();
        }
    }

    /// Collision state of the current head
    pub fn collision(&self, half_extent: i32) -> Option<CollisionType> {
        let head = self.head();
        if !head.is_within(half_extent) {
            return Some(CollisionType::Wall);
        }
        if self.segments.iter().skip(1).any(|&cell| cell == head) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// True if any segment, head included, sits on `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (never true; both constructors keep the head)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
