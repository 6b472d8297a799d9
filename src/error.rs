use std::io;

use thiserror::Error;

use crate::world::ValidationError;

/// Everything that can go wrong while loading or assembling a dungeon.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse world document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate room id '{0}'")]
    DuplicateRoom(String),

    #[error("room '{room}' has a door to unknown room '{target}'")]
    UnknownDoorTarget { room: String, target: String },

    #[error("entrance '{0}' not found among rooms")]
    UnknownEntrance(String),

    #[error("dungeon has no entrance")]
    MissingEntrance,

    #[error("world failed validation:\n{}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// Raised when the player picks a door that the room does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("door {index} does not exist (room has {doors} doors)")]
    DoorOutOfRange { index: usize, doors: usize },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e.message))
        .collect::<Vec<_>>()
        .join("\n")
}
