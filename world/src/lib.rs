#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the Mars Rover simulation.
//!
//! A [`World`] owns the committed rover position, the obstacle list and the
//! move history of the last successful batch. Nothing outside this crate can
//! mutate it except through [`apply`], which processes one [`Command`] to
//! completion before returning.

use mars_rover_core::{Command, Event, ObstacleSet, Position};
use mars_rover_system_interpreter as interpreter;
use tracing::{debug, info, trace};

/// Represents the authoritative rover session.
#[derive(Clone, Debug)]
pub struct World {
    position: Position,
    obstacles: ObstacleSet,
    history: Vec<Position>,
}

impl World {
    /// Creates a session at the origin surrounded by the seed obstacles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_setup(Position::origin(), ObstacleSet::default_seed())
    }

    /// Creates a session from an explicit starting position and obstacle list.
    #[must_use]
    pub fn with_setup(position: Position, obstacles: ObstacleSet) -> Self {
        Self {
            position,
            obstacles,
            history: Vec::new(),
        }
    }

    fn execute(&mut self, script: &str, out_events: &mut Vec<Event>) {
        match interpreter::execute(self.position, &self.obstacles, script) {
            Ok(trajectory) => {
                self.position = trajectory.final_position();
                self.history = trajectory.into_moves();
                debug!(
                    position = %self.position,
                    moves = self.history.len(),
                    "committed command batch"
                );
                out_events.push(Event::BatchCommitted {
                    position: self.position,
                    moves: self.history.len(),
                });
            }
            Err(collision) => {
                info!(
                    obstacle = %collision.obstacle,
                    index = collision.index,
                    "rejected command batch"
                );
                out_events.push(Event::BatchRejected { collision });
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Execute { script } => world.execute(&script, out_events),
        Command::AddObstacle { x, y } => {
            let index = world.obstacles.add(x, y);
            if let Some(obstacle) = world.obstacles.get(index) {
                out_events.push(Event::ObstacleAdded { index, obstacle });
            }
        }
        Command::RemoveObstacle { index } => match world.obstacles.remove(index) {
            Some(obstacle) => out_events.push(Event::ObstacleRemoved { index, obstacle }),
            None => trace!(index, "ignoring removal of missing obstacle"),
        },
        Command::EditObstacleCoordinate { index, axis, raw } => {
            match world.obstacles.update_coordinate(index, axis, &raw) {
                Some((from, to)) => out_events.push(Event::ObstacleEdited { index, from, to }),
                None => trace!(index, ?axis, raw = raw.as_str(), "ignoring obstacle edit"),
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use mars_rover_core::{ObstacleSet, Position};

    /// Committed rover position.
    #[must_use]
    pub fn position(world: &World) -> Position {
        world.position
    }

    /// Move history recorded by the last successful batch.
    #[must_use]
    pub fn history(world: &World) -> &[Position] {
        &world.history
    }

    /// Current obstacle list in editing order.
    #[must_use]
    pub fn obstacles(world: &World) -> &ObstacleSet {
        &world.obstacles
    }

    /// Reports whether `(x, y)` is blocked by any obstacle.
    #[must_use]
    pub fn is_blocked(world: &World, x: i32, y: i32) -> bool {
        world.obstacles.is_blocked(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_rover_core::{Axis, Heading, Obstacle};

    fn execute(world: &mut World, script: &str) -> Vec<Event> {
        let mut events = Vec::new();
        apply(
            world,
            Command::Execute {
                script: script.to_owned(),
            },
            &mut events,
        );
        events
    }

    #[test]
    fn new_world_starts_at_origin_with_seed() {
        let world = World::new();
        assert_eq!(query::position(&world), Position::origin());
        assert!(query::history(&world).is_empty());
        assert_eq!(query::obstacles(&world), &ObstacleSet::default_seed());
        assert!(query::is_blocked(&world, 7, 4));
    }

    #[test]
    fn successful_batch_replaces_history() {
        let mut world = World::new();
        let _ = execute(&mut world, "FF");
        assert_eq!(query::history(&world).len(), 2);

        let events = execute(&mut world, "R");
        assert_eq!(
            query::history(&world),
            &[Position::new(0, 2, Heading::East)]
        );
        assert_eq!(
            events,
            vec![Event::BatchCommitted {
                position: Position::new(0, 2, Heading::East),
                moves: 1,
            }]
        );
    }

    #[test]
    fn noise_batch_clears_history() {
        let mut world = World::new();
        let _ = execute(&mut world, "F");
        let events = execute(&mut world, "XQZ");

        assert_eq!(query::position(&world), Position::new(0, 1, Heading::North));
        assert!(query::history(&world).is_empty());
        assert_eq!(
            events,
            vec![Event::BatchCommitted {
                position: Position::new(0, 1, Heading::North),
                moves: 0,
            }]
        );
    }

    #[test]
    fn rejected_batch_leaves_state_untouched() {
        let mut obstacles = ObstacleSet::new();
        let _ = obstacles.add(1, 4);
        let mut world = World::with_setup(Position::new(1, 0, Heading::North), obstacles);
        let _ = execute(&mut world, "RL");
        let history_before = query::history(&world).to_vec();

        let events = execute(&mut world, "FFFF");

        assert_eq!(query::position(&world), Position::new(1, 0, Heading::North));
        assert_eq!(query::history(&world), history_before.as_slice());
        assert!(matches!(
            events.as_slice(),
            [Event::BatchRejected { collision }] if collision.obstacle == Obstacle::new(1, 4)
        ));
    }

    #[test]
    fn obstacle_commands_emit_events_only_on_change() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(&mut world, Command::AddObstacle { x: 0, y: 0 }, &mut events);
        apply(&mut world, Command::RemoveObstacle { index: 10 }, &mut events);
        apply(
            &mut world,
            Command::EditObstacleCoordinate {
                index: 0,
                axis: Axis::X,
                raw: "abc".to_owned(),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::EditObstacleCoordinate {
                index: 0,
                axis: Axis::X,
                raw: "2".to_owned(),
            },
            &mut events,
        );
        apply(&mut world, Command::RemoveObstacle { index: 1 }, &mut events);

        assert_eq!(
            events,
            vec![
                Event::ObstacleAdded {
                    index: 3,
                    obstacle: Obstacle::new(0, 0),
                },
                Event::ObstacleEdited {
                    index: 0,
                    from: Obstacle::new(1, 4),
                    to: Obstacle::new(2, 4),
                },
                Event::ObstacleRemoved {
                    index: 1,
                    obstacle: Obstacle::new(3, 5),
                },
            ]
        );
        assert_eq!(
            query::obstacles(&world).as_slice(),
            &[
                Obstacle::new(2, 4),
                Obstacle::new(7, 4),
                Obstacle::new(0, 0)
            ]
        );
    }

    #[test]
    fn added_obstacle_blocks_later_batches() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::AddObstacle { x: 0, y: 1 }, &mut events);

        let events = execute(&mut world, "F");
        assert!(matches!(events.as_slice(), [Event::BatchRejected { .. }]));
        assert_eq!(query::position(&world), Position::origin());
    }
}
