/// Axis-aligned direction the snake can travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PosX,
    PosY,
    PosZ,
    NegX,
    NegY,
    NegZ,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::PosY,
        Direction::PosZ,
        Direction::NegX,
        Direction::NegY,
        Direction::NegZ,
    ];

    /// The direction pointing the other way along the same axis
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::PosY => Direction::NegY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegX => Direction::PosX,
            Direction::NegY => Direction::PosY,
            Direction::NegZ => Direction::PosZ,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the unit step (dx, dy, dz) for moving in this direction
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::PosX => (1, 0, 0),
            Direction::PosY => (0, 1, 0),
            Direction::PosZ => (0, 0, 1),
            Direction::NegX => (-1, 0, 0),
            Direction::NegY => (0, -1, 0),
            Direction::NegZ => (0, 0, -1),
        }
    }

    /// Short label used by the HUD
    pub fn label(self) -> &'static str {
        match self {
            Direction::PosX => "+X",
            Direction::PosY => "+Y",
            Direction::PosZ => "+Z",
            Direction::NegX => "-X",
            Direction::NegY => "-Y",
            Direction::NegZ => "-Z",
        }
    }
}
