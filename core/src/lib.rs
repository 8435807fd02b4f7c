#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rover simulation.
//!
//! This crate defines the rover's value types and the message surface that
//! connects adapters with the authoritative world. Adapters submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! describing what actually changed. Systems are pure functions over the
//! values defined here.

use std::fmt;

use serde::{Deserialize, Serialize};

mod obstacles;

pub use obstacles::{Axis, Obstacle, ObstacleSet};

/// Message shown by presentation layers when a batch is rejected.
pub const COLLISION_MESSAGE: &str = "Error: Rover cannot move onto an obstacle!";

/// Cardinal compass directions the rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    /// Facing toward increasing `y`.
    North,
    /// Facing toward increasing `x`.
    East,
    /// Facing toward decreasing `y`.
    South,
    /// Facing toward decreasing `x`.
    West,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Heading reached by turning 90 degrees counter-clockwise.
    #[must_use]
    pub const fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Heading reached by turning 90 degrees clockwise.
    #[must_use]
    pub const fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Upper-case compass name of the heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Unit offset travelled by a forward step along this heading.
    const fn forward_delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Location and heading of the rover on the unbounded grid.
///
/// Positions are plain values: every derived state is a fresh copy, so a
/// working position can never alias committed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Position {
    x: i32,
    y: i32,
    heading: Heading,
}

impl Position {
    /// Creates a position at the provided coordinate facing `heading`.
    #[must_use]
    pub const fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Start state of a fresh session: `(0, 0)` facing north.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, Heading::North)
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

    /// Direction the rover is facing.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Coordinate occupied by the rover, without the heading.
    #[must_use]
    pub const fn cell(&self) -> Obstacle {
        Obstacle::new(self.x, self.y)
    }

    /// Advances one cell along the current heading.
    ///
    /// Coordinates wrap at the `i32` limits so the step stays total.
    #[must_use]
    pub const fn step_forward(self) -> Self {
        let (dx, dy) = self.heading.forward_delta();
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.heading,
        )
    }

    /// Retreats one cell against the current heading.
    #[must_use]
    pub const fn step_backward(self) -> Self {
        let (dx, dy) = self.heading.forward_delta();
        Self::new(
            self.x.wrapping_sub(dx),
            self.y.wrapping_sub(dy),
            self.heading,
        )
    }

    /// Same coordinate, turned counter-clockwise.
    #[must_use]
    pub const fn rotate_left(self) -> Self {
        Self::new(self.x, self.y, self.heading.rotate_left())
    }

    /// Same coordinate, turned clockwise.
    #[must_use]
    pub const fn rotate_right(self) -> Self {
        Self::new(self.x, self.y, self.heading.rotate_right())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.heading)
    }
}

/// Single-character instructions understood by the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoverCommand {
    /// `F`: move one cell forward.
    Forward,
    /// `B`: move one cell backward.
    Backward,
    /// `L`: rotate 90 degrees to the left.
    RotateLeft,
    /// `R`: rotate 90 degrees to the right.
    RotateRight,
}

impl RoverCommand {
    /// Decodes a command character, ignoring case.
    ///
    /// Returns `None` for every character outside `F`, `B`, `L` and `R`.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        match character.to_ascii_uppercase() {
            'F' => Some(Self::Forward),
            'B' => Some(Self::Backward),
            'L' => Some(Self::RotateLeft),
            'R' => Some(Self::RotateRight),
            _ => None,
        }
    }

    /// Canonical upper-case character for the command.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Backward => 'B',
            Self::RotateLeft => 'L',
            Self::RotateRight => 'R',
        }
    }

    /// Reports whether the command changes the rover's coordinate.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Applies the command to `position`, yielding the next position.
    #[must_use]
    pub const fn apply(self, position: Position) -> Position {
        match self {
            Self::Forward => position.step_forward(),
            Self::Backward => position.step_backward(),
            Self::RotateLeft => position.rotate_left(),
            Self::RotateRight => position.rotate_right(),
        }
    }
}

/// Raised when a movement would place the rover on a blocked coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("rover cannot move onto the obstacle at {obstacle}")]
pub struct ObstacleCollision {
    /// Blocked coordinate the rover attempted to enter.
    pub obstacle: Obstacle,
    /// Position that the failing step would have produced.
    pub attempted: Position,
    /// Last collision-free working position before the failing step.
    pub last_safe: Position,
    /// Character index of the failing command within the script.
    pub index: usize,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Runs a command batch against the committed rover state.
    Execute {
        /// Raw command string; unrecognised characters are ignored.
        script: String,
    },
    /// Appends an obstacle at the provided coordinate.
    AddObstacle {
        /// Horizontal coordinate of the new obstacle.
        x: i32,
        /// Vertical coordinate of the new obstacle.
        y: i32,
    },
    /// Removes the obstacle stored at `index`, if any.
    RemoveObstacle {
        /// Zero-based position within the obstacle list.
        index: usize,
    },
    /// Replaces one coordinate of the obstacle stored at `index`.
    EditObstacleCoordinate {
        /// Zero-based position within the obstacle list.
        index: usize,
        /// Coordinate being replaced.
        axis: Axis,
        /// Unparsed replacement value; non-integer text is ignored.
        raw: String,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A batch ran to completion and replaced the committed state.
    BatchCommitted {
        /// Committed rover position after the batch.
        position: Position,
        /// Number of entries recorded in the new move history.
        moves: usize,
    },
    /// A batch hit an obstacle and was discarded in full.
    BatchRejected {
        /// Details of the step that collided.
        collision: ObstacleCollision,
    },
    /// An obstacle was appended to the obstacle list.
    ObstacleAdded {
        /// Index assigned to the new obstacle.
        index: usize,
        /// Coordinate of the new obstacle.
        obstacle: Obstacle,
    },
    /// An obstacle was removed from the obstacle list.
    ObstacleRemoved {
        /// Index the obstacle occupied before removal.
        index: usize,
        /// Coordinate of the removed obstacle.
        obstacle: Obstacle,
    },
    /// One coordinate of an obstacle was replaced.
    ObstacleEdited {
        /// Index of the edited obstacle.
        index: usize,
        /// Coordinate before the edit.
        from: Obstacle,
        /// Coordinate after the edit.
        to: Obstacle,
    },
}

#[cfg(test)]
mod tests {
    use super::{Heading, Position, RoverCommand};

    #[test]
    fn forward_steps_follow_heading_axis() {
        let origin = Position::origin();
        assert_eq!(origin.step_forward(), Position::new(0, 1, Heading::North));
        assert_eq!(
            Position::new(0, 0, Heading::East).step_forward(),
            Position::new(1, 0, Heading::East)
        );
        assert_eq!(
            Position::new(0, 0, Heading::South).step_forward(),
            Position::new(0, -1, Heading::South)
        );
        assert_eq!(
            Position::new(0, 0, Heading::West).step_forward(),
            Position::new(-1, 0, Heading::West)
        );
    }

    #[test]
    fn backward_steps_invert_heading_axis() {
        assert_eq!(
            Position::origin().step_backward(),
            Position::new(0, -1, Heading::North)
        );
        assert_eq!(
            Position::new(3, 3, Heading::West).step_backward(),
            Position::new(4, 3, Heading::West)
        );
    }

    #[test]
    fn rotation_keeps_coordinate() {
        let position = Position::new(-2, 5, Heading::South);
        assert_eq!(position.rotate_left(), Position::new(-2, 5, Heading::East));
        assert_eq!(position.rotate_right(), Position::new(-2, 5, Heading::West));
    }

    #[test]
    fn steps_wrap_at_coordinate_limits() {
        let edge = Position::new(i32::MAX, 0, Heading::East);
        assert_eq!(edge.step_forward().x(), i32::MIN);
        assert_eq!(edge.step_forward().step_backward(), edge);
    }

    #[test]
    fn command_characters_are_case_insensitive() {
        assert_eq!(RoverCommand::from_char('f'), Some(RoverCommand::Forward));
        assert_eq!(RoverCommand::from_char('B'), Some(RoverCommand::Backward));
        assert_eq!(RoverCommand::from_char('l'), Some(RoverCommand::RotateLeft));
        assert_eq!(RoverCommand::from_char('R'), Some(RoverCommand::RotateRight));
        assert_eq!(RoverCommand::from_char('x'), None);
        assert_eq!(RoverCommand::from_char('#'), None);
        assert_eq!(RoverCommand::from_char(' '), None);
    }

    #[test]
    fn only_translation_commands_are_movements() {
        assert!(RoverCommand::Forward.is_movement());
        assert!(RoverCommand::Backward.is_movement());
        assert!(!RoverCommand::RotateLeft.is_movement());
        assert!(!RoverCommand::RotateRight.is_movement());
    }

    #[test]
    fn position_renders_like_history_readout() {
        assert_eq!(
            Position::new(2, -1, Heading::East).to_string(),
            "(2, -1) EAST"
        );
    }
}
