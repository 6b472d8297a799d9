use crate::error::WorldError;

use super::model::{Door, Dungeon, Entity, PlayerStart, Room, RoomId};
use super::validator::validate_dungeon;

/// Assembles a dungeon. Doors can only be added here; the built `Dungeon`
/// has no way to change its topology.
#[derive(Debug, Default)]
pub struct DungeonBuilder {
    name: String,
    intro: String,
    player: PlayerStart,
    rooms: Vec<Room>,
    entrance: Option<RoomId>,
}

impl DungeonBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        DungeonBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn player(mut self, player: PlayerStart) -> Self {
        self.player = player;
        self
    }

    pub fn create_room(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> RoomId {
        self.rooms.push(Room::new(id.into(), name.into(), desc.into()));
        RoomId(self.rooms.len() - 1)
    }

    pub fn add_entity(&mut self, room: RoomId, entity: impl Into<Entity>) {
        self.rooms[room.0].entities.push(entity.into());
    }

    /// Add a labelled door from `parent` to `child`.
    pub fn connect(&mut self, parent: RoomId, child: RoomId, label: impl Into<String>) {
        self.rooms[parent.0].doors.push(Door {
            label: label.into(),
            target: child,
        });
    }

    pub fn set_entrance(&mut self, room: RoomId) {
        self.entrance = Some(room);
    }

    pub fn build(self) -> Result<Dungeon, WorldError> {
        let entrance = self.entrance.ok_or(WorldError::MissingEntrance)?;

        let dungeon = Dungeon {
            name: self.name,
            intro: self.intro,
            player: self.player,
            rooms: self.rooms,
            entrance,
        };

        let errors = validate_dungeon(&dungeon);
        if !errors.is_empty() {
            return Err(WorldError::Invalid(errors));
        }

        tracing::debug!(
            rooms = dungeon.room_count(),
            entrance = %dungeon.room(entrance).name,
            "dungeon assembled"
        );
        Ok(dungeon)
    }
}
