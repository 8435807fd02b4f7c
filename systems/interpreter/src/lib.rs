#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure command interpreter that turns a rover script into a trajectory.
//!
//! The interpreter never touches committed state. It walks a working copy of
//! the starting position through the script and either hands back the full
//! [`Trajectory`] or reports the first [`ObstacleCollision`], leaving the
//! caller to decide what to commit.

use mars_rover_core::{ObstacleCollision, ObstacleSet, Position, RoverCommand};
use tracing::trace;

/// Ordered positions visited while running a collision-free batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    start: Position,
    moves: Vec<Position>,
}

impl Trajectory {
    fn new(start: Position) -> Self {
        Self {
            start,
            moves: Vec::new(),
        }
    }

    /// Position the batch started from.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Position after the last executed command.
    ///
    /// Equals [`Trajectory::start`] when no command was executed.
    #[must_use]
    pub fn final_position(&self) -> Position {
        self.moves.last().copied().unwrap_or(self.start)
    }

    /// Snapshot recorded after each executed command, in order.
    #[must_use]
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Consumes the trajectory, yielding the recorded snapshots.
    #[must_use]
    pub fn into_moves(self) -> Vec<Position> {
        self.moves
    }
}

/// Decodes the recognised commands of `script` alongside their character index.
///
/// Characters outside `F`, `B`, `L` and `R` (in either case) are skipped.
pub fn parse_script(script: &str) -> impl Iterator<Item = (usize, RoverCommand)> + '_ {
    script
        .chars()
        .enumerate()
        .filter_map(|(index, character)| match RoverCommand::from_char(character) {
            Some(command) => Some((index, command)),
            None => {
                trace!(index, ?character, "ignoring unrecognised command character");
                None
            }
        })
}

/// Runs `script` from `initial`, checking movements against `obstacles`.
///
/// The whole batch fails on the first movement that lands on an obstacle.
/// Rotations are recorded but never collision-checked.
pub fn execute(
    initial: Position,
    obstacles: &ObstacleSet,
    script: &str,
) -> Result<Trajectory, ObstacleCollision> {
    execute_with(initial, script, |x, y| obstacles.is_blocked(x, y))
}

/// Runs `script` from `initial`, consulting `is_blocked` after each movement.
///
/// The closure should mirror the semantics of [`ObstacleSet::is_blocked`].
pub fn execute_with<F>(
    initial: Position,
    script: &str,
    is_blocked: F,
) -> Result<Trajectory, ObstacleCollision>
where
    F: Fn(i32, i32) -> bool,
{
    let mut trajectory = Trajectory::new(initial);
    let mut working = initial;

    for (index, command) in parse_script(script) {
        let next = command.apply(working);
        if command.is_movement() && is_blocked(next.x(), next.y()) {
            return Err(ObstacleCollision {
                obstacle: next.cell(),
                attempted: next,
                last_safe: working,
                index,
            });
        }
        working = next;
        trajectory.moves.push(working);
    }

    Ok(trajectory)
}
