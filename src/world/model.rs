use crate::error::NavigationError;

//////////////////////////
/// ENTITIES           ///
//////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    pub desc: String,
    pub health: u32,
    pub damage: u32,
    pub alive: bool,
}

impl Monster {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, health: u32, damage: u32) -> Self {
        Monster {
            name: name.into(),
            desc: desc.into(),
            health,
            damage,
            alive: true,
        }
    }

    /// Subtracts `amount` from health (never below zero).
    /// Returns true only for the hit that brings the monster down.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub value: u32,
    pub collected: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, value: u32) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
            value,
            collected: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub name: String,
    pub desc: String,
    pub hidden: String,
    pub examined: bool,
}

impl Clue {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, hidden: impl Into<String>) -> Self {
        Clue {
            name: name.into(),
            desc: desc.into(),
            hidden: hidden.into(),
            examined: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Monster,
    Item,
    Clue,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Monster => "monster",
            EntityKind::Item => "item",
            EntityKind::Clue => "clue",
        }
    }
}

/// Anything the player can interact with inside a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Monster(Monster),
    Item(Item),
    Clue(Clue),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Monster(m) => &m.name,
            Entity::Item(i) => &i.name,
            Entity::Clue(c) => &c.name,
        }
    }

    pub fn desc(&self) -> &str {
        match self {
            Entity::Monster(m) => &m.desc,
            Entity::Item(i) => &i.desc,
            Entity::Clue(c) => &c.desc,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Monster(_) => EntityKind::Monster,
            Entity::Item(_) => EntityKind::Item,
            Entity::Clue(_) => EntityKind::Clue,
        }
    }
}

impl From<Monster> for Entity {
    fn from(m: Monster) -> Self {
        Entity::Monster(m)
    }
}

impl From<Item> for Entity {
    fn from(i: Item) -> Self {
        Entity::Item(i)
    }
}

impl From<Clue> for Entity {
    fn from(c: Clue) -> Self {
        Entity::Clue(c)
    }
}

//////////////////////////
/// ROOMS AND DUNGEON  ///
//////////////////////////

/// Index of a room inside its dungeon's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    pub label: String,
    pub target: RoomId,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub(crate) entities: Vec<Entity>,
    pub(crate) doors: Vec<Door>, // children, in insertion order
}

impl Room {
    pub(crate) fn new(id: String, name: String, desc: String) -> Self {
        Room {
            id,
            name,
            desc,
            entities: Vec::new(),
            doors: Vec::new(),
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}

/// Starting stats for the player, carried by the world document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStart {
    pub name: String,
    pub health: u32,
    pub attack: u32,
}

impl Default for PlayerStart {
    fn default() -> Self {
        PlayerStart {
            name: "Adventurer".to_string(),
            health: 100,
            attack: 25,
        }
    }
}

/// Owns every room. Topology is fixed once built; only entity state changes.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub name: String,
    pub intro: String,
    pub player: PlayerStart,
    pub(crate) rooms: Vec<Room>,
    pub(crate) entrance: RoomId,
}

impl Dungeon {
    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Panics if `id` was not produced for this dungeon.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn find_room(&self, id: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.id == id).map(RoomId)
    }

    /// Resolve a zero-based door index in `room` to the room behind it.
    pub fn door_target(&self, room: RoomId, index: usize) -> Result<RoomId, NavigationError> {
        let doors = &self.room(room).doors;
        doors
            .get(index)
            .map(|d| d.target)
            .ok_or(NavigationError::DoorOutOfRange {
                index,
                doors: doors.len(),
            })
    }
}
