use std::collections::{HashSet, VecDeque};

use thiserror::Error;

use super::model::{Dungeon, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Check that the dungeon is a well-formed tree rooted at its entrance.
pub fn validate_dungeon(dungeon: &Dungeon) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let rooms = &dungeon.rooms;

    if rooms.is_empty() {
        errors.push(ValidationError::new("dungeon has no rooms"));
        return errors;
    }

    if dungeon.entrance.0 >= rooms.len() {
        errors.push(ValidationError::new(format!(
            "entrance index {} is out of range",
            dungeon.entrance.0
        )));
        return errors;
    }

    // Room ids and names
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for room in rooms {
        if room.id.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty id",
                room.name
            )));
        } else if !seen_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room id '{}'",
                room.id
            )));
        }

        if room.name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty name",
                room.id
            )));
        }
    }

    if dungeon.player.health == 0 {
        errors.push(ValidationError::new(format!(
            "player '{}' must start with health above 0",
            dungeon.player.name
        )));
    }

    // Entities
    for room in rooms {
        for entity in &room.entities {
            if entity.name().trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds an unnamed {}",
                    room.id,
                    entity.kind().label()
                )));
            }
            if let Entity::Monster(m) = entity {
                if m.health == 0 {
                    errors.push(ValidationError::new(format!(
                        "monster '{}' in room '{}' must start with health above 0",
                        m.name, room.id
                    )));
                }
            }
        }
    }

    // Doors: targets exist, and every room except the entrance has exactly one parent
    let mut parents: Vec<usize> = vec![0; rooms.len()];
    for (idx, room) in rooms.iter().enumerate() {
        for door in &room.doors {
            if door.label.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has a door with an empty label",
                    room.id
                )));
            }

            if door.target.0 >= rooms.len() {
                errors.push(ValidationError::new(format!(
                    "room '{}' door '{}' targets missing room #{}",
                    room.id, door.label, door.target.0
                )));
                continue;
            }

            if door.target.0 == idx {
                errors.push(ValidationError::new(format!(
                    "room '{}' has a door leading to itself",
                    room.id
                )));
            }

            parents[door.target.0] += 1;
        }
    }

    for (idx, count) in parents.iter().enumerate() {
        let room = &rooms[idx];
        if idx == dungeon.entrance.0 {
            if *count > 0 {
                errors.push(ValidationError::new(format!(
                    "entrance '{}' must not be behind a door",
                    room.id
                )));
            }
        } else if *count > 1 {
            errors.push(ValidationError::new(format!(
                "room '{}' is behind {} doors; each room may only have one parent",
                room.id, count
            )));
        }
    }

    // Reachability from the entrance
    let mut reached = vec![false; rooms.len()];
    let mut queue = VecDeque::from([dungeon.entrance.0]);
    reached[dungeon.entrance.0] = true;

    while let Some(idx) = queue.pop_front() {
        for door in &rooms[idx].doors {
            let t = door.target.0;
            if t < rooms.len() && !reached[t] {
                reached[t] = true;
                queue.push_back(t);
            }
        }
    }

    for (idx, ok) in reached.iter().enumerate() {
        if !ok {
            errors.push(ValidationError::new(format!(
                "room '{}' is not reachable from the entrance",
                rooms[idx].id
            )));
        }
    }

    errors
}
