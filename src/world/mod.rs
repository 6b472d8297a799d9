mod builder;
mod loader;
mod model;
mod validator;

pub use builder::DungeonBuilder;
pub use loader::{builtin_dungeon, load_dungeon_from_file, load_dungeon_from_str};
pub use model::{
    Clue, Door, Dungeon, Entity, EntityKind, Item, Monster, PlayerStart, Room, RoomId,
};
pub use validator::{ValidationError, validate_dungeon};
