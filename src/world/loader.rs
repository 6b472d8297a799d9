use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::WorldError;

use super::builder::DungeonBuilder;
use super::model::{Clue, Dungeon, Entity, Item, Monster, PlayerStart, RoomId};

/// The temple shipped with the game.
const TEMPLE_TOML: &str = include_str!("../../worlds/temple.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    dungeon: DungeonHeader,
    #[serde(default)]
    player: Option<PlayerConfig>,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct DungeonHeader {
    name: String,
    entrance: String,
    #[serde(default)]
    intro: String,
}

#[derive(Deserialize)]
struct PlayerConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    health: Option<u32>,
    #[serde(default)]
    attack: Option<u32>,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    entity: Vec<EntityConfig>, // [[room.entity]]
    #[serde(default)]
    door: Vec<DoorConfig>, // [[room.door]]
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum EntityConfig {
    Monster {
        name: String,
        #[serde(default)]
        desc: String,
        health: u32,
        damage: u32,
    },
    Item {
        name: String,
        #[serde(default)]
        desc: String,
        value: u32,
    },
    Clue {
        name: String,
        #[serde(default)]
        desc: String,
        hidden: String,
    },
}

#[derive(Deserialize)]
struct DoorConfig {
    label: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// The built-in temple dungeon.
pub fn builtin_dungeon() -> Result<Dungeon, WorldError> {
    load_dungeon_from_str(TEMPLE_TOML)
}

pub fn load_dungeon_from_file(path: &Path) -> Result<Dungeon, WorldError> {
    let contents = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), "loading world file");
    load_dungeon_from_str(&contents)
}

pub fn load_dungeon_from_str(contents: &str) -> Result<Dungeon, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let defaults = PlayerStart::default();
    let player = match world_file.player {
        Some(p) => PlayerStart {
            name: p.name.unwrap_or(defaults.name),
            health: p.health.unwrap_or(defaults.health),
            attack: p.attack.unwrap_or(defaults.attack),
        },
        None => defaults,
    };

    let mut builder = DungeonBuilder::new(world_file.dungeon.name.trim())
        .intro(normalize_multiline_desc(&world_file.dungeon.intro))
        .player(player);

    // First pass: rooms, so doors can point forward
    let mut ids: HashMap<String, RoomId> = HashMap::new();
    for rc in &world_file.room {
        if ids.contains_key(&rc.id) {
            return Err(WorldError::DuplicateRoom(rc.id.clone()));
        }
        let room = builder.create_room(
            rc.id.clone(),
            rc.name.trim(),
            normalize_multiline_desc(&rc.desc),
        );
        ids.insert(rc.id.clone(), room);
    }

    // Second pass: contents and doors
    for rc in world_file.room {
        let room = ids[&rc.id];

        for ec in rc.entity {
            builder.add_entity(room, entity_from_config(ec));
        }

        for dc in rc.door {
            let target = ids
                .get(&dc.target)
                .copied()
                .ok_or_else(|| WorldError::UnknownDoorTarget {
                    room: rc.id.clone(),
                    target: dc.target.clone(),
                })?;
            builder.connect(room, target, dc.label.trim());
        }
    }

    let entrance = ids
        .get(&world_file.dungeon.entrance)
        .copied()
        .ok_or_else(|| WorldError::UnknownEntrance(world_file.dungeon.entrance.clone()))?;
    builder.set_entrance(entrance);

    builder.build()
}

fn entity_from_config(ec: EntityConfig) -> Entity {
    match ec {
        EntityConfig::Monster {
            name,
            desc,
            health,
            damage,
        } => Monster::new(name.trim(), normalize_multiline_desc(&desc), health, damage).into(),
        EntityConfig::Item { name, desc, value } => {
            Item::new(name.trim(), normalize_multiline_desc(&desc), value).into()
        }
        EntityConfig::Clue { name, desc, hidden } => Clue::new(
            name.trim(),
            normalize_multiline_desc(&desc),
            normalize_multiline_desc(&hidden),
        )
        .into(),
    }
}

/// Wrapped lines join with a space; one blank line becomes a newline,
/// two or more become a paragraph break. Indentation is dropped.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Entity, EntityKind};

    #[test]
    fn builtin_temple_loads() {
        let dungeon = builtin_dungeon().unwrap();
        assert_eq!(dungeon.room_count(), 6);

        let entrance = dungeon.room(dungeon.entrance());
        assert_eq!(entrance.name, "Temple Entrance");
        assert_eq!(entrance.doors().len(), 1);
        assert_eq!(entrance.doors()[0].label, "North Door - Main Hall");

        let hall = dungeon.find_room("main_hall").unwrap();
        let labels: Vec<&str> = dungeon
            .room(hall)
            .doors()
            .iter()
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[2].starts_with("Hidden Door"));

        assert_eq!(dungeon.player, PlayerStart::default());
    }

    #[test]
    fn builtin_temple_contents_match_the_story() {
        let dungeon = builtin_dungeon().unwrap();
        let hall = dungeon.room(dungeon.find_room("main_hall").unwrap());

        match hall.entity(0) {
            Some(Entity::Monster(m)) => {
                assert_eq!(m.name, "Giant Spider");
                assert_eq!((m.health, m.damage), (40, 15));
            }
            other => panic!("expected the spider, got {other:?}"),
        }

        let vault = dungeon.room(dungeon.find_room("treasure_vault").unwrap());
        match vault.entity(0) {
            Some(Entity::Item(i)) => assert_eq!((i.name.as_str(), i.value), ("Golden Amulet", 100)),
            other => panic!("expected the amulet, got {other:?}"),
        }

        let sanctum = dungeon.room(dungeon.find_room("inner_sanctum").unwrap());
        assert!(sanctum.doors().is_empty());
        assert_eq!(sanctum.entities()[0].kind(), EntityKind::Item);
    }

    #[test]
    fn player_table_overrides_defaults() {
        let src = r#"
            [dungeon]
            name = "Shed"
            entrance = "shed"

            [player]
            attack = 7

            [[room]]
            id = "shed"
            name = "Shed"
        "#;
        let dungeon = load_dungeon_from_str(src).unwrap();
        assert_eq!(dungeon.player.attack, 7);
        assert_eq!(dungeon.player.health, 100);
        assert_eq!(dungeon.player.name, "Adventurer");
    }

    #[test]
    fn player_starting_at_zero_health_is_invalid() {
        let src = r#"
            [dungeon]
            name = "Crypt"
            entrance = "a"

            [player]
            health = 0

            [[room]]
            id = "a"
            name = "A"
              [[room.door]]
              label = "Down"
              target = "b"

            [[room]]
            id = "b"
            name = "B"
        "#;
        match load_dungeon_from_str(src) {
            Err(WorldError::Invalid(errors)) => {
                assert!(errors.iter().any(|e| e.message.contains("health above 0")));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_door_target_is_reported() {
        let src = r#"
            [dungeon]
            name = "Broken"
            entrance = "a"

            [[room]]
            id = "a"
            name = "A"
              [[room.door]]
              label = "Nowhere"
              target = "b"
        "#;
        match load_dungeon_from_str(src) {
            Err(WorldError::UnknownDoorTarget { room, target }) => {
                assert_eq!((room.as_str(), target.as_str()), ("a", "b"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn duplicate_room_and_missing_entrance() {
        let dup = r#"
            [dungeon]
            name = "Twice"
            entrance = "a"
            [[room]]
            id = "a"
            name = "A"
            [[room]]
            id = "a"
            name = "Also A"
        "#;
        assert!(matches!(
            load_dungeon_from_str(dup),
            Err(WorldError::DuplicateRoom(id)) if id == "a"
        ));

        let lost = r#"
            [dungeon]
            name = "Lost"
            entrance = "gate"
            [[room]]
            id = "a"
            name = "A"
        "#;
        assert!(matches!(
            load_dungeon_from_str(lost),
            Err(WorldError::UnknownEntrance(id)) if id == "gate"
        ));
    }

    #[test]
    fn unknown_entity_kind_is_a_parse_error() {
        let src = r#"
            [dungeon]
            name = "Odd"
            entrance = "a"
            [[room]]
            id = "a"
            name = "A"
              [[room.entity]]
              kind = "dragon"
              name = "Smaug"
        "#;
        assert!(matches!(load_dungeon_from_str(src), Err(WorldError::Parse(_))));
    }

    #[test]
    fn normalizes_wrapped_text() {
        let raw = "\n    First line\n    continues.\n\n    New line.\n\n\n    New paragraph.\n";
        assert_eq!(
            normalize_multiline_desc(raw),
            "First line continues.\nNew line.\n\nNew paragraph."
        );
    }
}
