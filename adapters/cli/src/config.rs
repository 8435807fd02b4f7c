//! TOML configuration describing the initial session state.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use mars_rover_core::{Obstacle, ObstacleSet, Position};
use mars_rover_world::World;
use serde::Deserialize;

/// Initial rover position and obstacle layout.
///
/// Missing fields fall back to the origin and the default obstacle seed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    start: Position,
    obstacles: Option<Vec<[i32; 2]>>,
}

impl Config {
    /// Loads the configuration stored at `path`.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }

    /// Builds the world described by the configuration.
    #[must_use]
    pub(crate) fn into_world(self) -> World {
        let obstacles = match self.obstacles {
            Some(cells) => cells.into_iter().map(Obstacle::from).collect(),
            None => ObstacleSet::default_seed(),
        };
        World::with_setup(self.start, obstacles)
    }
}
