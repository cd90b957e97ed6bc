use std::fmt;

/// The four cardinal directions, ordered to match tile edge slots
///
/// The discriminant doubles as the edge-slot index: a variant's edge array
/// is laid out `[up, right, down, left]`, so `edges[Direction::Right.index()]`
/// is the signature of its right face. Grid coordinates follow raster
/// convention with y growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y, the top face of a tile
    Up = 0,
    /// Toward increasing x, the right face
    Right = 1,
    /// Toward increasing y, the bottom face
    Down = 2,
    /// Toward decreasing x, the left face
    Left = 3,
}

impl Direction {
    /// All four directions in edge-slot order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Edge-slot index of this direction
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back toward the origin cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Grid offset as `(dx, dy)`
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        write!(f, "{name}")
    }
}
