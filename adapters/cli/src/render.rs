//! Plain-text rendering of the rover session.

use mars_rover_core::{Event, ObstacleSet, Position, COLLISION_MESSAGE};

/// Explanation of the command alphabet and the session keywords.
pub(crate) const HELP: &str = "\
Commands (any other character is ignored):
  F = Move forward on current heading
  B = Move backwards on current heading
  L = Rotate left by 90 degrees
  R = Rotate right by 90 degrees

Session keywords:
  add [x y]              add an obstacle, at (0, 0) unless given
  remove <index>         remove an obstacle
  edit <index> <x|y> <v> change one coordinate of an obstacle
  obstacles              list obstacles
  history                show the move history of the last batch
  position               show the current position
  help                   show this text
  quit                   leave the session";

/// Current position readout.
#[must_use]
pub(crate) fn position(position: Position) -> String {
    format!("Current position: {position}")
}

/// Move history, one entry per line, under a heading line.
#[must_use]
pub(crate) fn history(moves: &[Position]) -> Vec<String> {
    let mut lines = Vec::with_capacity(moves.len() + 1);
    lines.push("Move history:".to_owned());
    if moves.is_empty() {
        lines.push("  (empty)".to_owned());
    }
    lines.extend(moves.iter().map(|entry| format!("  {entry}")));
    lines
}

/// Obstacle list with the indices used by `remove` and `edit`.
#[must_use]
pub(crate) fn obstacles(obstacles: &ObstacleSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(obstacles.len() + 1);
    lines.push("Obstacles:".to_owned());
    if obstacles.is_empty() {
        lines.push("  (none)".to_owned());
    }
    lines.extend(
        obstacles
            .iter()
            .enumerate()
            .map(|(index, obstacle)| format!("  [{index}] {obstacle}")),
    );
    lines
}

/// One-line summary of an obstacle event, if the event concerns obstacles.
#[must_use]
pub(crate) fn obstacle_event(event: &Event) -> Option<String> {
    match event {
        Event::ObstacleAdded { index, obstacle } => {
            Some(format!("Added obstacle [{index}] {obstacle}"))
        }
        Event::ObstacleRemoved { index, obstacle } => {
            Some(format!("Removed obstacle [{index}] {obstacle}"))
        }
        Event::ObstacleEdited { index, from, to } => {
            Some(format!("Moved obstacle [{index}] {from} -> {to}"))
        }
        Event::BatchCommitted { .. } | Event::BatchRejected { .. } => None,
    }
}

/// Message displayed after a rejected batch.
#[must_use]
pub(crate) const fn collision() -> &'static str {
    COLLISION_MESSAGE
}
