//! Line-oriented session that forwards user input to the world.

use std::io::{self, Write};

use mars_rover_core::{Axis, Command, Event};
use mars_rover_world::{self as world, query, World};

use crate::render;

/// Parsed form of a single input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// Raw command batch for the rover.
    Batch(String),
    /// World mutation derived from a session keyword.
    Edit(Command),
    /// Print the obstacle list.
    ShowObstacles,
    /// Print the move history of the last successful batch.
    ShowHistory,
    /// Print the current position and any standing error.
    ShowPosition,
    /// Print the help text.
    Help,
    /// End the session.
    Quit,
    /// Malformed keyword arguments; ignored like any other bad input.
    Ignored,
}

impl Input {
    /// Interprets one line. Keywords take precedence over command batches.
    #[must_use]
    pub(crate) fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Self::Batch(line.trim().to_owned());
        };
        let arguments: Vec<&str> = words.collect();

        match (keyword.to_ascii_lowercase().as_str(), arguments.as_slice()) {
            ("add", []) => Self::Edit(Command::AddObstacle { x: 0, y: 0 }),
            ("add", [x, y]) => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => Self::Edit(Command::AddObstacle { x, y }),
                _ => Self::Ignored,
            },
            ("remove", [index]) => match index.parse() {
                Ok(index) => Self::Edit(Command::RemoveObstacle { index }),
                Err(_) => Self::Ignored,
            },
            ("edit", [index, axis, raw]) => match (index.parse(), Axis::from_label(axis)) {
                (Ok(index), Some(axis)) => Self::Edit(Command::EditObstacleCoordinate {
                    index,
                    axis,
                    raw: (*raw).to_owned(),
                }),
                _ => Self::Ignored,
            },
            ("obstacles", []) => Self::ShowObstacles,
            ("history", []) => Self::ShowHistory,
            ("position", []) => Self::ShowPosition,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (
                "add" | "remove" | "edit" | "obstacles" | "history" | "position" | "help" | "quit"
                | "exit",
                _,
            ) => Self::Ignored,
            _ => Self::Batch(line.trim().to_owned()),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Keep reading.
    Continue,
    /// Stop reading.
    Quit,
}

/// Presentation state wrapped around the authoritative world.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    error_message: Option<&'static str>,
}

impl Session {
    /// Wraps a freshly created world.
    #[must_use]
    pub(crate) fn new(world: World) -> Self {
        Self {
            world,
            error_message: None,
        }
    }

    /// Processes one input, writing any feedback to `out`.
    pub(crate) fn handle(&mut self, input: Input, out: &mut impl Write) -> io::Result<Flow> {
        match input {
            Input::Batch(script) => self.run_batch(script, out)?,
            Input::Edit(command) => {
                for event in self.apply(command) {
                    if let Some(line) = render::obstacle_event(&event) {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            Input::ShowObstacles => {
                write_lines(out, render::obstacles(query::obstacles(&self.world)))?;
            }
            Input::ShowHistory => write_lines(out, render::history(query::history(&self.world)))?,
            Input::ShowPosition => {
                writeln!(out, "{}", render::position(query::position(&self.world)))?;
                if let Some(message) = self.error_message {
                    writeln!(out, "{message}")?;
                }
            }
            Input::Help => writeln!(out, "{}", render::HELP)?,
            Input::Quit => return Ok(Flow::Quit),
            Input::Ignored => {}
        }
        Ok(Flow::Continue)
    }

    fn run_batch(&mut self, script: String, out: &mut impl Write) -> io::Result<()> {
        for event in self.apply(Command::Execute { script }) {
            match event {
                Event::BatchCommitted { position, .. } => {
                    self.error_message = None;
                    writeln!(out, "{}", render::position(position))?;
                    write_lines(out, render::history(query::history(&self.world)))?;
                }
                Event::BatchRejected { .. } => {
                    self.error_message = Some(render::collision());
                    writeln!(out, "{}", render::collision())?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        events
    }
}

fn write_lines(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
