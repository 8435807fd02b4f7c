//! Obstacle value types and the ordered obstacle set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Obstacles present when a session starts without explicit configuration.
const DEFAULT_SEED: [Obstacle; 3] = [
    Obstacle::new(1, 4),
    Obstacle::new(3, 5),
    Obstacle::new(7, 4),
];

/// Blocked grid coordinate that the rover may not occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    x: i32,
    y: i32,
}

impl Obstacle {
    /// Creates an obstacle at the provided coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Reports whether the obstacle sits on `(x, y)`.
    #[must_use]
    pub const fn occupies(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    /// Returns a copy with the selected coordinate replaced.
    #[must_use]
    pub const fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }
}

impl From<[i32; 2]> for Obstacle {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate selector used when editing an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
}

impl Axis {
    /// Decodes `x` or `y`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "x" | "X" => Some(Self::X),
            "y" | "Y" => Some(Self::Y),
            _ => None,
        }
    }
}

/// Ordered, duplicate-tolerant collection of obstacles.
///
/// Order only matters for presenting and editing the list; membership
/// tests scan every entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    entries: Vec<Obstacle>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates the seed layout used by a fresh session.
    #[must_use]
    pub fn default_seed() -> Self {
        Self {
            entries: DEFAULT_SEED.to_vec(),
        }
    }

    /// Reports whether any obstacle occupies `(x, y)`.
    #[must_use]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.entries.iter().any(|obstacle| obstacle.occupies(x, y))
    }

    /// Appends an obstacle at `(x, y)` and returns its index.
    ///
    /// Duplicates are kept.
    pub fn add(&mut self, x: i32, y: i32) -> usize {
        self.entries.push(Obstacle::new(x, y));
        self.entries.len() - 1
    }

    /// Appends an obstacle at the origin and returns its index.
    pub fn add_default(&mut self) -> usize {
        self.add(0, 0)
    }

    /// Removes the obstacle at `index`.
    ///
    /// Returns `None` without touching the set when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Obstacle> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Replaces one coordinate of the obstacle at `index` with `raw` parsed
    /// as a decimal integer.
    ///
    /// Unparseable text and out-of-range indices leave the set unchanged.
    /// Returns the obstacle before and after the edit when it changed.
    pub fn update_coordinate(
        &mut self,
        index: usize,
        axis: Axis,
        raw: &str,
    ) -> Option<(Obstacle, Obstacle)> {
        let value = raw.trim().parse::<i32>().ok()?;
        let slot = self.entries.get_mut(index)?;
        let before = *slot;
        let after = before.with(axis, value);
        if before == after {
            return None;
        }
        *slot = after;
        Some((before, after))
    }

    /// Obstacle stored at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Obstacle> {
        self.entries.get(index).copied()
    }

    /// Number of obstacles, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the set holds no obstacles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the obstacles in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.entries.iter()
    }

    /// Obstacles in list order.
    #[must_use]
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.entries
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
