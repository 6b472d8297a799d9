use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{Dungeon, RoomId};

const ROOM_RULE_WIDTH: usize = 40;

/// Name, description, numbered contents and numbered doors of a room.
pub fn render_room(out: &mut Output, dungeon: &Dungeon, room_id: RoomId) {
    let room = dungeon.room(room_id);

    out.title(room.name.clone());
    out.say(room.desc.clone());

    if room.entities().is_empty() {
        out.menu("The room appears empty.", Vec::<String>::new());
    } else {
        out.menu(
            "You see the following:",
            room.entities()
                .iter()
                .enumerate()
                .map(|(i, e)| format!("  {}. {} - {}", i + 1, e.name(), e.desc())),
        );
    }

    if room.doors().is_empty() {
        out.menu(
            "There are no visible exits. This might be the final room!",
            Vec::<String>::new(),
        );
    } else {
        out.menu(
            "Doors/Exits:",
            room.doors()
                .iter()
                .enumerate()
                .map(|(i, d)| format!("  {}. {}", i + 1, d.label)),
        );
    }

    out.rule(ROOM_RULE_WIDTH);
}

pub fn render_status(out: &mut Output, player: &Player) {
    let mut lines = vec![
        format!("Name: {}", player.name()),
        format!("Health: {}/{}", player.health(), player.max_health()),
        format!("Attack Power: {}", player.attack()),
        format!("Score: {}", player.score()),
    ];

    if player.inventory().is_empty() {
        lines.push("Inventory: Empty".to_string());
    } else {
        lines.push("Inventory:".to_string());
        lines.extend(player.inventory().iter().map(|i| format!("  - {i}")));
    }

    out.menu("=== Player Status ===", lines);
}

pub fn render_dungeon_info(out: &mut Output, dungeon: &Dungeon) {
    out.menu(
        "=== Dungeon Information ===",
        [
            format!("Name: {}", dungeon.name),
            format!("Total Rooms: {}", dungeon.room_count()),
            format!("Entrance: {}", dungeon.room(dungeon.entrance()).name),
        ],
    );
}

pub fn render_welcome(out: &mut Output, dungeon: &Dungeon) {
    out.banner([format!(
        "WELCOME TO THE {}!",
        dungeon.name.to_uppercase()
    )]);
    if !dungeon.intro.is_empty() {
        out.say(dungeon.intro.clone());
    }
}

pub fn render_game_over(out: &mut Output) {
    out.banner(["GAME OVER", "You have been defeated..."]);
}

pub fn render_final_score(out: &mut Output, player: &Player) {
    out.event(format!("Final Score: {}", player.score()));
}
