use crate::error::ZcellError;
use crate::index::precision::Precision;
use serde::{Deserialize, Serialize};

/// One of the eight compass directions around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Per-axis step as `(lat, lon)`, each in `{-1, 0, 1}`.
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// What happens when a move would step off the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Toroidal: moving past the last row or column wraps to the first.
    #[default]
    Wrap,
    /// The axis stays put at the edge, so the neighbor collapses onto an
    /// existing code. Use this near the poles and the antimeridian.
    Clamp,
}

/// The center cell and its eight neighbors, all at one precision.
///
/// Duplicates are possible at the grid boundary and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighborSet {
    pub north: u64,
    pub north_east: u64,
    pub east: u64,
    pub south_east: u64,
    pub south: u64,
    pub south_west: u64,
    pub west: u64,
    pub north_west: u64,
    pub center: u64,
}

impl NeighborSet {
    pub fn get(&self, direction: Direction) -> u64 {
        match direction {
            Direction::North => self.north,
            Direction::NorthEast => self.north_east,
            Direction::East => self.east,
            Direction::SouthEast => self.south_east,
            Direction::South => self.south,
            Direction::SouthWest => self.south_west,
            Direction::West => self.west,
            Direction::NorthWest => self.north_west,
        }
    }

    /// The eight neighbors clockwise from north, followed by the center.
    pub fn to_array(&self) -> [u64; 9] {
        [
            self.north,
            self.north_east,
            self.east,
            self.south_east,
            self.south,
            self.south_west,
            self.west,
            self.north_west,
            self.center,
        ]
    }
}

/// Steps one axis of `code` by `delta` cells, leaving the other axis untouched.
///
/// `moving` is the bit plane being stepped and `fixed` the other plane, both
/// already restricted to the active width. Filling the fixed plane with ones
/// lets the carry (or borrow) ripple straight across it, so a plain integer
/// add or subtract steps only the moving axis.
fn move_axis(code: u64, delta: i8, moving: u64, fixed: u64, policy: EdgePolicy) -> u64 {
    let axis = code & moving;
    let other = code & fixed;

    let stepped = match delta.signum() {
        0 => return code,
        1 if policy == EdgePolicy::Clamp && axis == moving => axis,
        -1 if policy == EdgePolicy::Clamp && axis == 0 => axis,
        1 => axis.wrapping_add(fixed).wrapping_add(1),
        _ => (axis | fixed).wrapping_sub(fixed.wrapping_add(1)),
    };

    (stepped & moving) | other
}

pub(crate) fn move_lat(code: u64, delta: i8, precision: Precision, policy: EdgePolicy) -> u64 {
    move_axis(
        code,
        delta,
        precision.lat_mask(),
        precision.lon_mask(),
        policy,
    )
}

pub(crate) fn move_lon(code: u64, delta: i8, precision: Precision, policy: EdgePolicy) -> u64 {
    move_axis(
        code,
        delta,
        precision.lon_mask(),
        precision.lat_mask(),
        policy,
    )
}

/// Returns the code one cell away from `code` in `direction`.
pub fn neighbor(
    code: u64,
    direction: Direction,
    precision: u8,
    policy: EdgePolicy,
) -> Result<u64, ZcellError> {
    let precision = Precision::new(precision)?;
    Ok(neighbor_with(code, direction, precision, policy))
}

pub(crate) fn neighbor_with(
    code: u64,
    direction: Direction,
    precision: Precision,
    policy: EdgePolicy,
) -> u64 {
    let (dlat, dlon) = direction.offsets();
    let moved = move_lat(code, dlat, precision, policy);
    move_lon(moved, dlon, precision, policy)
}

/// Computes the 3x3 neighborhood of `code`, wrapping at the grid edges.
pub fn neighbors(code: u64, precision: u8) -> Result<NeighborSet, ZcellError> {
    neighbors_with_policy(code, precision, EdgePolicy::Wrap)
}

/// Computes the 3x3 neighborhood of `code` under the given edge policy.
pub fn neighbors_with_policy(
    code: u64,
    precision: u8,
    policy: EdgePolicy,
) -> Result<NeighborSet, ZcellError> {
    let precision = Precision::new(precision)?;
    Ok(neighbors_with(code, precision, policy))
}

pub(crate) fn neighbors_with(code: u64, precision: Precision, policy: EdgePolicy) -> NeighborSet {
    let code = code & precision.active_mask();

    let north = move_lat(code, 1, precision, policy);
    let east = move_lon(code, 1, precision, policy);
    let south = move_lat(code, -1, precision, policy);
    let west = move_lon(code, -1, precision, policy);

    NeighborSet {
        north,
        north_east: move_lon(north, 1, precision, policy),
        east,
        south_east: move_lat(east, -1, precision, policy),
        south,
        south_west: move_lon(south, -1, precision, policy),
        west,
        north_west: move_lat(west, 1, precision, policy),
        center: code,
    }
}
