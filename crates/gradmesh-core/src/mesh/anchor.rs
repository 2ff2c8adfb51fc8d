use core::fmt;
use core::str::FromStr;

use crate::coords::Vec2;
use crate::paint::Rgb;

/// A grid point with a position in `[0, 1]²` and a color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    pub position: Vec2,
    pub color: Rgb,
}

impl Anchor {
    #[inline]
    pub const fn new(position: Vec2, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Side of an anchor a tangent handle points toward.
///
/// The declaration order is the canonical transfer order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

    /// Position of this direction in the flattened handle layout.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown handle direction name.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown handle direction `{0}` (expected top, right, bottom or left)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Direction::Top),
            "right" => Ok(Direction::Right),
            "bottom" => Ok(Direction::Bottom),
            "left" => Ok(Direction::Left),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

/// The four tangent handles owned by one anchor.
///
/// Each entry is an offset relative to the anchor, not an absolute position.
/// Components stay within `[-HANDLE_LIMIT, HANDLE_LIMIT]`; `MeshState`
/// enforces this on every mutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandleSet {
    pub top: Vec2,
    pub right: Vec2,
    pub bottom: Vec2,
    pub left: Vec2,
}

impl HandleSet {
    /// Axis-aligned handles of the given length pointing at each neighbor.
    #[inline]
    pub const fn uniform(length: f32) -> Self {
        Self {
            top: Vec2::new(0.0, -length),
            right: Vec2::new(length, 0.0),
            bottom: Vec2::new(0.0, length),
            left: Vec2::new(-length, 0.0),
        }
    }

    #[inline]
    pub fn get(&self, direction: Direction) -> Vec2 {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Returns a copy with only `direction` replaced.
    #[inline]
    pub fn with(mut self, direction: Direction, offset: Vec2) -> Self {
        match direction {
            Direction::Top => self.top = offset,
            Direction::Right => self.right = offset,
            Direction::Bottom => self.bottom = offset,
            Direction::Left => self.left = offset,
        }
        self
    }

    /// Offsets in canonical direction order.
    #[inline]
    pub fn to_array(&self) -> [Vec2; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}
